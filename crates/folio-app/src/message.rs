//! Message types for the application (TEA pattern)

use folio_core::{NavTarget, SectionId};

/// All possible messages/actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Theme Messages
    // ─────────────────────────────────────────────────────────
    /// Theme button clicked
    ToggleTheme,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Hamburger button clicked
    ToggleMenu,
    /// Collapse the mobile menu
    CloseMenu,
    /// Home link or a section link clicked
    NavLinkActivated(NavTarget),

    // ─────────────────────────────────────────────────────────
    // Scroll Reveal Messages
    // ─────────────────────────────────────────────────────────
    /// Intersection report from the platform visibility notifier
    SectionIntersected {
        section: SectionId,
        is_intersecting: bool,
    },
}
