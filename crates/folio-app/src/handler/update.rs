//! Main update function - handles state transitions (TEA pattern)

use folio_core::prelude::*;
use folio_core::{NavTarget, SectionId};

use crate::message::Message;
use crate::scroll::ScrollRequest;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::ToggleTheme => handle_toggle_theme(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleMenu => {
            state.menu.toggle();
            UpdateResult::none()
        }

        Message::CloseMenu => {
            state.menu.close();
            UpdateResult::none()
        }

        Message::NavLinkActivated(target) => handle_nav_link(state, target),

        // ─────────────────────────────────────────────────────────
        // Scroll Reveal Messages
        // ─────────────────────────────────────────────────────────
        Message::SectionIntersected {
            section,
            is_intersecting,
        } => handle_section_intersected(state, section, is_intersecting),
    }
}

fn handle_toggle_theme(state: &mut AppState) -> UpdateResult {
    let theme = state.theme.toggle();
    info!("Theme switched to '{}'", theme);
    UpdateResult::action(UpdateAction::PersistTheme { theme })
}

/// Scroll to the link target; an open mobile menu collapses after navigation
fn handle_nav_link(state: &mut AppState, target: NavTarget) -> UpdateResult {
    let request = ScrollRequest {
        target,
        duration_ms: state.scroll.effective_duration_ms(),
        offset_px: state.scroll.header_offset_px,
    };
    let result = UpdateResult::action(UpdateAction::ScrollTo(request));

    if state.menu.is_open() {
        result.then(Message::CloseMenu)
    } else {
        result
    }
}

fn handle_section_intersected(
    state: &mut AppState,
    section: SectionId,
    is_intersecting: bool,
) -> UpdateResult {
    let outcome = state.reveal.on_intersection(section, is_intersecting);
    trace!("Intersection on '{}': {:?}", section, outcome);
    UpdateResult::none()
}
