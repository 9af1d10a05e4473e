//! Engine: application state plus the storage it persists to
//!
//! The host owns one `Engine` for the lifetime of the page and feeds every
//! user or platform event through [`Engine::dispatch`]. Actions that only
//! touch storage are performed here; scroll requests are handed back to the
//! host, which owns the viewport.

use folio_core::prelude::*;
use folio_core::{PreferenceStore, SiteSettings, ThemePreference, ThemeTokens};

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::scroll::ScrollRequest;
use crate::state::AppState;
use crate::theme::ThemeController;

pub struct Engine<S: PreferenceStore> {
    state: AppState,
    store: S,
}

impl<S: PreferenceStore> Engine<S> {
    /// Create the engine, reading the persisted theme synchronously so the
    /// first render already uses it.
    pub fn new(store: S, settings: &SiteSettings) -> Self {
        let theme = ThemeController::initialize(&store, &settings.theme);
        Self {
            state: AppState::new(theme, settings),
            store,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn theme(&self) -> ThemePreference {
        self.state.theme.current()
    }

    pub fn tokens(&self) -> &'static ThemeTokens {
        self.state.tokens()
    }

    /// Process a message through the TEA update loop
    ///
    /// Returns the scroll the host should animate, if any.
    pub fn dispatch(&mut self, message: Message) -> Option<ScrollRequest> {
        let mut scroll = None;

        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);

            if let Some(action) = result.action {
                if let Some(request) = self.handle_action(action) {
                    scroll = Some(request);
                }
            }

            msg = result.message;
        }

        scroll
    }

    fn handle_action(&mut self, action: UpdateAction) -> Option<ScrollRequest> {
        match action {
            UpdateAction::PersistTheme { theme } => {
                self.persist_theme(theme);
                None
            }
            UpdateAction::ScrollTo(request) => Some(request),
        }
    }

    /// Failures are logged and swallowed; the theme still applies for this session
    fn persist_theme(&mut self, theme: ThemePreference) {
        let key = &self.state.storage_key;
        match self.store.save(key, theme.as_str()) {
            Ok(()) => debug!("Persisted theme '{}' under '{}'", theme, key),
            Err(e) => warn!("Theme '{}' kept in memory only: {}", theme, e),
        }
    }
}
