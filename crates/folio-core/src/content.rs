//! Static page content
//!
//! Everything rendered in the content sections lives here as plain data.
//! Nothing is mutated at runtime; order in each list is display order.

/// A run of text inside a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    /// Highlighted run, rendered bold in the emphasis colour
    Strong(&'static str),
    /// Inline external link, opened in a new tab
    Link {
        text: &'static str,
        href: &'static str,
    },
}

/// Paragraph made of inline runs
pub type RichText = Vec<Inline>;

/// Plain text of a paragraph with markup dropped
pub fn plain_text(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Text(text) | Inline::Strong(text) => *text,
            Inline::Link { text, .. } => *text,
        })
        .collect()
}

pub struct Profile {
    pub name: &'static str,
    /// Shown in the hero next to the name
    pub photo: &'static str,
    pub tagline: RichText,
    pub about: RichText,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub items: Vec<&'static str>,
}

pub struct ExperienceEntry {
    pub organization: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub highlights: Vec<&'static str>,
}

/// Fixed-size screenshot thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

pub struct ProjectEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub paragraphs: Vec<RichText>,
    pub highlights: Vec<RichText>,
    pub gallery: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `mailto:` link, handled by the mail client in the same tab
    Mail,
    /// Profile on another site, opened in a new tab
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: LinkKind,
}

impl ContactLink {
    pub fn opens_new_tab(&self) -> bool {
        self.kind == LinkKind::External
    }

    /// `target` attribute value, if any
    pub fn target(&self) -> Option<&'static str> {
        self.opens_new_tab().then_some("_blank")
    }

    /// `rel` attribute value, if any
    pub fn rel(&self) -> Option<&'static str> {
        self.opens_new_tab().then_some("noopener noreferrer")
    }
}

pub fn profile() -> Profile {
    Profile {
        name: "Shejil",
        photo: "/profile.jpg",
        tagline: vec![
            Inline::Text("Frontend-focused JavaScript developer specialized in "),
            Inline::Strong("React & Next.js"),
            Inline::Text(". Exploring Go APIs and Flutter mobile apps."),
        ],
        about: vec![
            Inline::Text(
                "I started my career as a React.js developer and have been working as a \
                 Next.js developer for the last 2 years. At the Department of Posts (CEPT), \
                 I contributed to migrating from legacy TCS systems to modern in-house web \
                 solutions. I have also explored backend APIs in Go and built a mobile app \
                 for SSC aspirants using Flutter & Firebase. My strongest area is ",
            ),
            Inline::Strong("JavaScript and Next.js"),
            Inline::Text("."),
        ],
    }
}

pub fn skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup {
            title: "Core",
            items: vec!["JavaScript (ES6+)", "React.js", "Next.js"],
        },
        SkillGroup {
            title: "Secondary",
            items: vec!["Go (APIs)", "Flutter (Firebase)"],
        },
        SkillGroup {
            title: "Tools",
            items: vec!["GitHub & GitLab", "Firebase", "REST APIs"],
        },
    ]
}

pub fn experience() -> Vec<ExperienceEntry> {
    vec![ExperienceEntry {
        organization: "Department of Posts (CEPT)",
        role: "Frontend \u{2192} Full Stack",
        duration: "1.5 years",
        highlights: vec![
            "Built React & Next.js frontend modules for in-house CEPT solution.",
            "Developed APIs in Go with guidance from AI tools.",
            "Collaborated in migration from legacy TCS software.",
        ],
    }]
}

/// `count` screenshots named `screen_shot_N.jpg`, numbered from 1
pub fn screenshot_gallery(count: u32) -> Vec<GalleryImage> {
    (1..=count)
        .map(|n| GalleryImage {
            src: format!("/screen_shot_{n}.jpg"),
            alt: format!("App Screenshot {n}"),
            width: 300,
            height: 600,
        })
        .collect()
}

pub fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            icon: "\u{1F4F1}",
            title: "SSC Aspirant App (Flutter + Firebase)",
            paragraphs: vec![vec![
                Inline::Text("A mobile application for exam aspirants with "),
                Inline::Strong("Firebase Authentication"),
                Inline::Text(" and "),
                Inline::Strong("Realtime Database"),
                Inline::Text(
                    ". Features quiz practice, progress tracking, and secure login. Published on ",
                ),
                Inline::Link {
                    text: "Google Play Store",
                    href: "https://play.google.com/store/apps/details?id=your_app_id",
                },
                Inline::Text("."),
            ]],
            highlights: Vec::new(),
            gallery: screenshot_gallery(3),
        },
        ProjectEntry {
            icon: "\u{1F4BB}",
            title: "India Post \u{2013} Nationwide Web Solution (Next.js + Go + PostgreSQL)",
            paragraphs: vec![
                vec![
                    Inline::Text("Worked as a "),
                    Inline::Strong("Full Stack Developer"),
                    Inline::Text(" on the complete in-house web solution for "),
                    Inline::Strong("India Post"),
                    Inline::Text(
                        ", one of the world\u{2019}s largest organizations handling data and \
                         services. The system is deployed across ",
                    ),
                    Inline::Strong("1.5 lakh+ offices nationwide"),
                    Inline::Text(", serving millions of customers daily."),
                ],
                vec![Inline::Text(
                    "The platform powers critical services including booking, tracking, \
                     Postal Life Insurance (PLI), delivery of consignments, and the sale of \
                     stamps and related services.",
                )],
            ],
            highlights: vec![
                vec![
                    Inline::Text("Specialized in "),
                    Inline::Strong("Next.js"),
                    Inline::Text(
                        " for developing scalable, responsive, and production-ready frontend modules.",
                    ),
                ],
                vec![
                    Inline::Text("Wrote optimized "),
                    Inline::Strong("PostgreSQL queries"),
                    Inline::Text(" to handle massive datasets at national scale."),
                ],
                vec![
                    Inline::Text("Developed and integrated secure "),
                    Inline::Strong("Go APIs"),
                    Inline::Text(" for high-performance backend operations."),
                ],
                vec![
                    Inline::Text("Contributed to one of the "),
                    Inline::Strong("largest data-driven systems in the world"),
                    Inline::Text(", ensuring reliable digital services for citizens across India."),
                ],
            ],
            gallery: Vec::new(),
        },
    ]
}

pub fn growth_items() -> Vec<&'static str> {
    vec![
        "Strengthened core expertise in JavaScript and Next.js.",
        "Exploring backend development with Go APIs.",
        "Learning mobile development via Flutter & Firebase.",
        "Use AI tools like ChatGPT for faster learning and productivity.",
    ]
}

/// Lead-in line above the contact links
pub const CONTACT_BLURB: &str = "Interested in working together? Let\u{2019}s connect.";

pub fn contact_links() -> Vec<ContactLink> {
    vec![
        ContactLink {
            label: "Email",
            href: "mailto:youremail@example.com",
            kind: LinkKind::Mail,
        },
        ContactLink {
            label: "GitHub",
            href: "https://github.com/yourusername",
            kind: LinkKind::External,
        },
        ContactLink {
            label: "GitLab",
            href: "https://gitlab.com/yourusername",
            kind: LinkKind::External,
        },
        ContactLink {
            label: "LinkedIn",
            href: "https://linkedin.com/in/yourusername",
            kind: LinkKind::External,
        },
    ]
}

pub fn copyright_notice(year: u32) -> String {
    format!("\u{00A9} {year} {}. All rights reserved.", profile().name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_groups() {
        let groups = skill_groups();
        let titles: Vec<_> = groups.iter().map(|g| g.title).collect();
        assert_eq!(titles, ["Core", "Secondary", "Tools"]);
        assert!(groups.iter().all(|g| !g.items.is_empty()));
    }

    #[test]
    fn test_one_experience_entry() {
        let entries = experience();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].highlights.len(), 3);
    }

    #[test]
    fn test_two_projects_first_has_gallery() {
        let projects = projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].gallery.len(), 3);
        assert!(projects[1].gallery.is_empty());
        assert_eq!(projects[1].highlights.len(), 4);
    }

    #[test]
    fn test_screenshot_gallery_alt_text() {
        let gallery = screenshot_gallery(3);
        assert_eq!(gallery[0].src, "/screen_shot_1.jpg");
        assert_eq!(gallery[2].alt, "App Screenshot 3");
        assert!(gallery.iter().all(|img| img.width == 300 && img.height == 600));
    }

    #[test]
    fn test_contact_link_targets() {
        let links = contact_links();
        let mail = links.iter().find(|l| l.kind == LinkKind::Mail).unwrap();
        assert!(mail.href.starts_with("mailto:"));
        assert_eq!(mail.target(), None);
        assert_eq!(mail.rel(), None);

        for link in links.iter().filter(|l| l.kind == LinkKind::External) {
            assert!(link.href.starts_with("https://"));
            assert_eq!(link.target(), Some("_blank"));
            assert_eq!(link.rel(), Some("noopener noreferrer"));
        }
    }

    #[test]
    fn test_plain_text_flattens_runs() {
        let text = plain_text(&profile().tagline);
        assert_eq!(
            text,
            "Frontend-focused JavaScript developer specialized in React & Next.js. \
             Exploring Go APIs and Flutter mobile apps."
        );
    }

    #[test]
    fn test_project_link_is_inline() {
        let first = &projects()[0];
        let has_store_link = first.paragraphs[0]
            .iter()
            .any(|run| matches!(run, Inline::Link { text: "Google Play Store", .. }));
        assert!(has_store_link);
    }

    #[test]
    fn test_copyright_notice() {
        assert_eq!(
            copyright_notice(2026),
            "\u{00A9} 2026 Shejil. All rights reserved."
        );
    }

    #[test]
    fn test_growth_items() {
        assert_eq!(growth_items().len(), 4);
        assert!(CONTACT_BLURB.starts_with("Interested"));
    }
}
