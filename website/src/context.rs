//! Application state handle shared through the component tree
//!
//! [`App`](crate::App) creates one [`Portfolio`] and provides it as context;
//! components read the theme and UI state from it and send every event
//! through [`Portfolio::dispatch`].

use folio_app::{Engine, Message};
use folio_core::{RevealSettings, SectionId, SiteSettings, ThemePreference, ThemeTokens};
use leptos::prelude::*;

use crate::scroll;
use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct Portfolio {
    engine: RwSignal<Engine<BrowserStorage>>,
    theme: Memo<ThemePreference>,
    menu_open: Memo<bool>,
    reveal: StoredValue<RevealSettings>,
}

impl Portfolio {
    /// Build the engine; the stored theme is read here, before anything renders
    pub fn new(settings: &SiteSettings) -> Self {
        let engine = RwSignal::new(Engine::new(BrowserStorage, settings));
        let theme = Memo::new(move |_| engine.with(|e| e.theme()));
        let menu_open = Memo::new(move |_| engine.with(|e| e.state().menu.is_open()));

        Self {
            engine,
            theme,
            menu_open,
            reveal: StoredValue::new(settings.reveal.clone()),
        }
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme.get()
    }

    pub fn tokens(&self) -> &'static ThemeTokens {
        self.theme.get().tokens()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.engine
            .with(|e| e.state().reveal.is_revealed(section))
    }

    pub fn is_revealed_untracked(&self, section: SectionId) -> bool {
        self.engine
            .with_untracked(|e| e.state().reveal.is_revealed(section))
    }

    pub fn reveal_settings(&self) -> RevealSettings {
        self.reveal.get_value()
    }

    /// Reactive class string: fixed `base` classes plus one theme token
    pub fn class(
        self,
        base: &'static str,
        token: fn(&ThemeTokens) -> &'static str,
    ) -> impl Fn() -> String + Copy + Send + Sync + 'static {
        move || format!("{base} {}", token(self.tokens()))
    }

    /// Feed a message through the engine and start any scroll it requests
    pub fn dispatch(&self, message: Message) {
        let scroll = self
            .engine
            .try_update(|engine| engine.dispatch(message))
            .flatten();

        if let Some(request) = scroll {
            scroll::animate(request);
        }
    }
}

pub fn provide_portfolio(settings: &SiteSettings) -> Portfolio {
    let portfolio = Portfolio::new(settings);
    provide_context(portfolio);
    portfolio
}

pub fn use_portfolio() -> Portfolio {
    expect_context::<Portfolio>()
}
