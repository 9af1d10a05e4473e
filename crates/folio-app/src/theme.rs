//! Theme controller: current scheme, initialised once from storage

use folio_core::prelude::*;
use folio_core::{PreferenceStore, ThemePreference, ThemeSettings, ThemeTokens};

/// Holds the active [`ThemePreference`]
///
/// The persisted value is consulted exactly once, in [`ThemeController::initialize`].
/// After that only [`ThemeController::toggle`] changes the scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeController {
    current: ThemePreference,
}

impl ThemeController {
    pub fn new(current: ThemePreference) -> Self {
        Self { current }
    }

    /// Adopt the stored theme if it is present and valid, otherwise the configured default.
    ///
    /// Storage failures and unknown values are logged and treated as "nothing stored".
    pub fn initialize<S>(store: &S, settings: &ThemeSettings) -> Self
    where
        S: PreferenceStore + ?Sized,
    {
        let current = match store.load(&settings.storage_key) {
            Ok(Some(value)) => match value.parse::<ThemePreference>() {
                Ok(theme) => {
                    debug!("Restored theme '{}' from storage", theme);
                    theme
                }
                Err(e) => {
                    warn!("Ignoring stored theme: {}", e);
                    settings.default
                }
            },
            Ok(None) => {
                debug!("No stored theme, using '{}'", settings.default);
                settings.default
            }
            Err(e) => {
                warn!("Theme storage unreadable, using '{}': {}", settings.default, e);
                settings.default
            }
        };

        Self { current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip between dark and light, returning the new scheme
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        self.current
    }

    pub fn tokens(&self) -> &'static ThemeTokens {
        self.current.tokens()
    }
}
