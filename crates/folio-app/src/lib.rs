//! folio-app - Application state and orchestration for the portfolio site
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events, and
//! [`handler::update`] the only place state changes. The [`Engine`] pairs
//! the state with the host's preference storage.

pub mod engine;
pub mod handler;
pub mod message;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod state;
pub mod theme;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use nav::{NavMenu, NavMenuState};
pub use reveal::{RevealOutcome, RevealTracker, SectionVisibility};
pub use scroll::{ScrollPlan, ScrollRequest};
pub use state::AppState;
pub use theme::ThemeController;
