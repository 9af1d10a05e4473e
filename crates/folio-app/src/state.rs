//! Application state (Model in TEA pattern)

use folio_core::{ScrollSettings, SiteSettings, ThemeTokens};

use crate::nav::NavMenu;
use crate::reveal::RevealTracker;
use crate::theme::ThemeController;

/// Everything the page can change at runtime
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub theme: ThemeController,
    pub menu: NavMenu,
    pub reveal: RevealTracker,

    /// Storage key the theme is persisted under
    pub storage_key: String,

    pub scroll: ScrollSettings,
}

impl AppState {
    pub fn new(theme: ThemeController, settings: &SiteSettings) -> Self {
        Self {
            theme,
            menu: NavMenu::default(),
            reveal: RevealTracker::default(),
            storage_key: settings.theme.storage_key.clone(),
            scroll: settings.scroll,
        }
    }

    /// Style tokens for the active theme
    pub fn tokens(&self) -> &'static ThemeTokens {
        self.theme.tokens()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemeController::default(), &SiteSettings::default())
    }
}
