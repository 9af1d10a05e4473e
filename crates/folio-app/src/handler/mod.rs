//! Handler module - TEA update function
//!
//! - `update`: Main update() function and message dispatch

pub(crate) mod update;

#[cfg(test)]
mod tests;

use folio_core::ThemePreference;

use crate::message::Message;
use crate::scroll::ScrollRequest;

// Re-export main entry point
pub use update::update;

/// Actions the engine should perform after update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Write the new theme to client storage
    PersistTheme { theme: ThemePreference },

    /// Hand a smooth-scroll request to the host
    ScrollTo(ScrollRequest),
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the engine to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Attach a follow-up message to this result
    pub fn then(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
