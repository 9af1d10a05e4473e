pub mod footer;
pub mod gallery;
pub mod icons;
pub mod inline_text;
pub mod meta;
pub mod navbar;
pub mod theme_toggle;
