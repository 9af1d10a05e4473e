//! # folio-core - Core Domain Types
//!
//! Foundation crate for the portfolio site. Provides the theme preference and
//! its style tokens, page sections, the storage abstraction, site settings,
//! static page content, and error handling.
//!
//! This crate has **zero internal dependencies** and never touches the DOM, so
//! everything here runs under plain `cargo test`.
//!
//! ## Public API
//!
//! ### Theme (`theme`)
//! - [`ThemePreference`] - Dark / light choice, persisted as `"dark"` / `"light"`
//! - [`ThemeTokens`] - Named Tailwind class strings for every themed surface
//!
//! ### Sections (`section`)
//! - [`SectionId`] - Content sections in display order
//! - [`NavTarget`] - Home or a section, the destination of a nav link
//!
//! ### Storage (`storage`)
//! - [`PreferenceStore`] - Durable key/value storage implemented by the host
//! - [`MemoryStore`] - In-memory implementation
//!
//! ### Settings (`settings`)
//! - [`SiteSettings`] - Parsed `site.toml`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod section;
pub mod settings;
pub mod storage;
pub mod theme;

/// Prelude for common imports used throughout all portfolio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use section::{NavTarget, SectionId};
pub use settings::{
    LoggingSettings, PageMetadata, RevealSettings, ScrollSettings, SiteSettings, ThemeSettings,
    MAX_SCROLL_DURATION_MS,
};
pub use storage::{MemoryStore, PreferenceStore};
pub use theme::{ThemePreference, ThemeTokens};
