//! Page sections and navigation targets

use std::fmt;

/// The content sections of the page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    About,
    Skills,
    Experience,
    Projects,
    Growth,
    Contact,
}

impl SectionId {
    /// All sections in the order they are rendered and linked
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Growth,
        SectionId::Contact,
    ];

    /// DOM id used as the in-page anchor
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Growth => "growth",
            SectionId::Contact => "contact",
        }
    }

    /// Link text in the navigation panel
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Growth => "Growth",
            SectionId::Contact => "Contact",
        }
    }

    /// Heading rendered at the top of the section
    pub fn heading(self) -> &'static str {
        match self {
            SectionId::About => "About Me",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Growth => "Learning & Growth",
            SectionId::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// Where a navigation link scrolls to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Top of the page (the brand link)
    Home,
    Section(SectionId),
}

impl NavTarget {
    /// DOM id to scroll to, `None` for the top of the page
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            NavTarget::Home => None,
            NavTarget::Section(section) => Some(section.anchor()),
        }
    }
}

impl From<SectionId> for NavTarget {
    fn from(section: SectionId) -> Self {
        NavTarget::Section(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_display_order() {
        let labels: Vec<_> = SectionId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["About", "Skills", "Experience", "Projects", "Growth", "Contact"]
        );
    }

    #[test]
    fn test_anchors_are_unique() {
        let mut anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_href_and_headings() {
        assert_eq!(SectionId::Growth.href(), "#growth");
        assert_eq!(SectionId::Growth.heading(), "Learning & Growth");
        assert_eq!(SectionId::About.heading(), "About Me");
    }

    #[test]
    fn test_nav_target_anchor() {
        assert_eq!(NavTarget::Home.anchor(), None);
        assert_eq!(NavTarget::from(SectionId::Contact).anchor(), Some("contact"));
    }
}
