use folio_core::prelude::*;
use folio_core::SiteSettings;
use folio_website::{App, SITE_TOML};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let parsed = SiteSettings::from_toml_str(SITE_TOML);
    let level = parsed
        .as_ref()
        .ok()
        .and_then(|settings| settings.logging.level.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info);
    console_log::init_with_level(level).expect("error initializing logger");

    let settings = parsed
        .context("Failed to load site settings")
        .unwrap_or_default();
    debug!("Loaded site settings for {:?}", settings.metadata.title);

    mount_to_body(move || view! { <App settings=settings.clone() /> });
}
