pub mod components;
pub mod context;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod storage;

use components::footer::Footer;
use components::meta::SiteMeta;
use components::navbar::Navbar;
use context::provide_portfolio;
use folio_core::prelude::*;
use folio_core::SiteSettings;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use pages::home::Home;

/// Site settings, embedded at build time
pub const SITE_TOML: &str = include_str!("../site.toml");

#[component]
pub fn App(settings: SiteSettings) -> impl IntoView {
    provide_meta_context();
    let portfolio = provide_portfolio(&settings);

    // Keep the pre-hydration background rule in index.html in step with the theme
    Effect::new(move |_| {
        let theme = portfolio.theme();
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                warn!("Failed to set data-theme: {:?}", e);
            }
        }
    });

    view! {
        <SiteMeta metadata=settings.metadata />
        <div class=portfolio.class(
            "min-h-screen flex flex-col font-sans transition-colors duration-300 selection:bg-violet-500/30",
            |t| t.page,
        )>
            <Navbar />
            <Home />
            <Footer />
        </div>
    }
}
