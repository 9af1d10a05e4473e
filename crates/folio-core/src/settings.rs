//! Site settings parsed from `site.toml`
//!
//! Every section is optional; missing fields fall back to the defaults
//! below. The file is embedded by the host at compile time.

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::theme::ThemePreference;

/// Longest allowed smooth-scroll animation; navigation must stay sub-second
pub const MAX_SCROLL_DURATION_MS: u32 = 900;

/// Site settings (site.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub metadata: PageMetadata,

    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub scroll: ScrollSettings,

    #[serde(default)]
    pub reveal: RevealSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl SiteSettings {
    /// Parse and validate settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: SiteSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.theme.storage_key.trim().is_empty() {
            return Err(Error::config_invalid("theme.storage_key must not be empty"));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(Error::config_invalid(format!(
                "reveal.threshold must be between 0 and 1, got {}",
                self.reveal.threshold
            )));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Document head metadata
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageMetadata {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub author: String,

    #[serde(default = "default_favicon")]
    pub favicon: String,

    #[serde(default)]
    pub open_graph: OpenGraph,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            keywords: Vec::new(),
            author: String::new(),
            favicon: default_favicon(),
            open_graph: OpenGraph::default(),
        }
    }
}

impl PageMetadata {
    /// Keywords joined for the `keywords` meta tag
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Social preview card
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OpenGraph {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub site_name: String,

    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_og_type", rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub image: Option<PreviewImage>,
}

impl Default for OpenGraph {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: String::new(),
            site_name: String::new(),
            locale: default_locale(),
            kind: default_og_type(),
            image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PreviewImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub alt: String,
}

fn default_title() -> String {
    "Portfolio".to_string()
}

fn default_favicon() -> String {
    "/favicon.ico".to_string()
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_og_type() -> String {
    "website".to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Behavior
// ─────────────────────────────────────────────────────────────────────────────

/// Theme persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeSettings {
    /// Storage key holding "dark" or "light"
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Theme used when nothing valid is stored
    #[serde(default)]
    pub default: ThemePreference,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            default: ThemePreference::Dark,
        }
    }
}

fn default_storage_key() -> String {
    "theme".to_string()
}

/// In-page navigation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScrollSettings {
    /// Smooth-scroll duration in milliseconds (clamped to [`MAX_SCROLL_DURATION_MS`])
    #[serde(default = "default_scroll_duration_ms")]
    pub duration_ms: u32,

    /// Height of the fixed header, subtracted from section offsets
    #[serde(default = "default_header_offset_px")]
    pub header_offset_px: u32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            duration_ms: default_scroll_duration_ms(),
            header_offset_px: default_header_offset_px(),
        }
    }
}

impl ScrollSettings {
    /// Configured duration, capped so navigation stays sub-second
    pub fn effective_duration_ms(&self) -> u32 {
        if self.duration_ms > MAX_SCROLL_DURATION_MS {
            warn!(
                "scroll.duration_ms = {} exceeds {}ms, clamping",
                self.duration_ms, MAX_SCROLL_DURATION_MS
            );
        }
        self.duration_ms.min(MAX_SCROLL_DURATION_MS)
    }
}

fn default_scroll_duration_ms() -> u32 {
    500
}

fn default_header_offset_px() -> u32 {
    64
}

/// Entrance animation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RevealSettings {
    /// Fraction of a section that must be visible before it reveals
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,

    /// CSS margin applied to the viewport when testing intersection
    #[serde(default = "default_root_margin")]
    pub root_margin: String,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            root_margin: default_root_margin(),
        }
    }
}

fn default_reveal_threshold() -> f64 {
    0.15
}

fn default_root_margin() -> String {
    "0px 0px -10% 0px".to_string()
}

/// Browser console logging
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// One of "error", "warn", "info", "debug", "trace"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = SiteSettings::from_toml_str("").unwrap();

        assert_eq!(settings.theme.storage_key, "theme");
        assert_eq!(settings.theme.default, ThemePreference::Dark);
        assert_eq!(settings.scroll.duration_ms, 500);
        assert_eq!(settings.scroll.header_offset_px, 64);
        assert_eq!(settings.reveal.threshold, 0.15);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.metadata.title, "Portfolio");
        assert_eq!(settings.metadata.open_graph.locale, "en_US");
    }

    #[test]
    fn test_custom_settings() {
        let config = r#"
[theme]
storage_key = "portfolio-theme"
default = "light"

[scroll]
duration_ms = 300

[reveal]
threshold = 0.5

[metadata]
title = "Jane Doe"
keywords = ["rust", "leptos"]

[metadata.open_graph]
type = "profile"

[metadata.open_graph.image]
url = "https://example.com/og.png"
width = 1200
height = 630
"#;
        let settings = SiteSettings::from_toml_str(config).unwrap();

        assert_eq!(settings.theme.storage_key, "portfolio-theme");
        assert_eq!(settings.theme.default, ThemePreference::Light);
        assert_eq!(settings.scroll.duration_ms, 300);
        assert_eq!(settings.scroll.header_offset_px, 64);
        assert_eq!(settings.reveal.threshold, 0.5);
        assert_eq!(settings.metadata.keywords_content(), "rust, leptos");
        assert_eq!(settings.metadata.open_graph.kind, "profile");

        let image = settings.metadata.open_graph.image.unwrap();
        assert_eq!((image.width, image.height), (1200, 630));
        assert!(image.alt.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = SiteSettings::from_toml_str("not valid toml {{{{").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_invalid_theme_default_is_an_error() {
        let err = SiteSettings::from_toml_str("[theme]\ndefault = \"sepia\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let err = SiteSettings::from_toml_str("[theme]\nstorage_key = \"  \"").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let err = SiteSettings::from_toml_str("[reveal]\nthreshold = 1.5").unwrap_err();
        assert!(err.to_string().contains("reveal.threshold"));
    }

    #[test]
    fn test_wrong_field_type_is_an_error() {
        let err = SiteSettings::from_toml_str("[scroll]\nduration_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_scroll_duration_is_clamped() {
        let scroll = ScrollSettings {
            duration_ms: 2_500,
            ..ScrollSettings::default()
        };
        assert_eq!(scroll.effective_duration_ms(), MAX_SCROLL_DURATION_MS);
        assert_eq!(ScrollSettings::default().effective_duration_ms(), 500);
    }

    #[test]
    fn test_bundled_site_settings_are_valid() {
        let content = include_str!("../../../website/site.toml");
        let settings = SiteSettings::from_toml_str(content).unwrap();

        assert_eq!(settings.theme.storage_key, "theme");
        assert!(!settings.metadata.description.is_empty());
        assert!(settings.metadata.open_graph.image.is_some());
    }
}
