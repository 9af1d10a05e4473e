//! Theme preference and the style tokens derived from it
//!
//! Every themed element reads its classes from [`ThemeTokens`] instead of
//! branching on the theme itself. Token values are full Tailwind class
//! strings so the Tailwind scanner picks them up from this file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The user's colour scheme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Value written to client storage
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// The opposite scheme
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Style tokens for this scheme
    pub fn tokens(self) -> &'static ThemeTokens {
        match self {
            ThemePreference::Dark => &DARK_TOKENS,
            ThemePreference::Light => &LIGHT_TOKENS,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(Error::invalid_theme(other)),
        }
    }
}

/// Named class strings for every themed surface of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Page background and base text colour
    pub page: &'static str,
    /// Fixed header bar
    pub nav: &'static str,
    /// Links inside the header and the mobile menu
    pub nav_link: &'static str,
    /// Dropdown panel shown on narrow viewports
    pub mobile_menu: &'static str,
    /// Brand name, highlighted words and inline links
    pub accent: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    /// Bold runs inside body text
    pub emphasis: &'static str,
    /// Project cards
    pub card: &'static str,
    /// Screenshot frames in a project gallery
    pub thumbnail: &'static str,
    pub toggle_button: &'static str,
    pub footer: &'static str,
}

impl ThemeTokens {
    /// Token names paired with their class strings, in declaration order
    pub fn entries(&self) -> [(&'static str, &'static str); 12] {
        [
            ("page", self.page),
            ("nav", self.nav),
            ("nav_link", self.nav_link),
            ("mobile_menu", self.mobile_menu),
            ("accent", self.accent),
            ("heading", self.heading),
            ("body", self.body),
            ("emphasis", self.emphasis),
            ("card", self.card),
            ("thumbnail", self.thumbnail),
            ("toggle_button", self.toggle_button),
            ("footer", self.footer),
        ]
    }
}

pub const DARK_TOKENS: ThemeTokens = ThemeTokens {
    page: "bg-gray-900 text-gray-200",
    nav: "bg-gray-900/80 border-gray-800",
    nav_link: "text-gray-300 hover:text-violet-400",
    mobile_menu: "bg-gray-900 border-gray-800",
    accent: "text-violet-400",
    heading: "text-gray-100",
    body: "text-gray-400",
    emphasis: "text-gray-200",
    card: "border-gray-700 bg-gray-800/40",
    thumbnail: "border-gray-700 bg-black",
    toggle_button: "bg-gray-800 text-yellow-300 hover:bg-gray-700",
    footer: "border-gray-800 text-gray-500",
};

pub const LIGHT_TOKENS: ThemeTokens = ThemeTokens {
    page: "bg-gray-50 text-gray-800",
    nav: "bg-white/80 border-gray-200",
    nav_link: "text-gray-600 hover:text-violet-600",
    mobile_menu: "bg-white border-gray-200",
    accent: "text-violet-600",
    heading: "text-gray-900",
    body: "text-gray-600",
    emphasis: "text-gray-900 font-medium",
    card: "border-gray-200 bg-white",
    thumbnail: "border-gray-200 bg-gray-100",
    toggle_button: "bg-gray-200 text-gray-800 hover:bg-gray-300",
    footer: "border-gray-200 text-gray-600",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn token_table(theme: ThemePreference) -> String {
        theme
            .tokens()
            .entries()
            .iter()
            .map(|(name, classes)| format!("{name}: {classes}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemePreference::default(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        for theme in [ThemePreference::Dark, ThemePreference::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_parse_stored_values() {
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert_eq!(" light\n".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = "Light".parse::<ThemePreference>().unwrap_err();
        assert!(matches!(err, Error::InvalidTheme { .. }));
        assert!("".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_display_matches_stored_value() {
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(ThemePreference::Light.to_string(), "light");
    }

    #[test]
    fn test_every_token_differs_between_schemes() {
        let dark = ThemePreference::Dark.tokens().entries();
        let light = ThemePreference::Light.tokens().entries();

        for ((name, dark_classes), (_, light_classes)) in dark.iter().zip(light.iter()) {
            assert_ne!(dark_classes, light_classes, "token '{name}' is not themed");
        }
    }

    #[test]
    fn test_dark_tokens_snapshot() {
        insta::assert_snapshot!(token_table(ThemePreference::Dark), @r"
        page: bg-gray-900 text-gray-200
        nav: bg-gray-900/80 border-gray-800
        nav_link: text-gray-300 hover:text-violet-400
        mobile_menu: bg-gray-900 border-gray-800
        accent: text-violet-400
        heading: text-gray-100
        body: text-gray-400
        emphasis: text-gray-200
        card: border-gray-700 bg-gray-800/40
        thumbnail: border-gray-700 bg-black
        toggle_button: bg-gray-800 text-yellow-300 hover:bg-gray-700
        footer: border-gray-800 text-gray-500
        ");
    }

    #[test]
    fn test_light_tokens_snapshot() {
        insta::assert_snapshot!(token_table(ThemePreference::Light), @r"
        page: bg-gray-50 text-gray-800
        nav: bg-white/80 border-gray-200
        nav_link: text-gray-600 hover:text-violet-600
        mobile_menu: bg-white border-gray-200
        accent: text-violet-600
        heading: text-gray-900
        body: text-gray-600
        emphasis: text-gray-900 font-medium
        card: border-gray-200 bg-white
        thumbnail: border-gray-200 bg-gray-100
        toggle_button: bg-gray-200 text-gray-800 hover:bg-gray-300
        footer: border-gray-200 text-gray-600
        ");
    }
}
