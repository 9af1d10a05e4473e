use folio_core::content::{
    contact_links, experience, growth_items, profile, projects, skill_groups, ContactLink,
    ProjectEntry, CONTACT_BLURB,
};
use folio_core::SectionId;
use leptos::prelude::*;

use crate::components::gallery::ScreenshotGallery;
use crate::components::inline_text::InlineText;
use crate::context::use_portfolio;
use crate::reveal::RevealSection;

const SECTION: &str = "max-w-4xl mx-auto px-6 py-12";

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="pt-24 flex-grow">
            <Hero />
            <About />
            <Skills />
            <Experience />
            <Projects />
            <Growth />
            <Contact />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let portfolio = use_portfolio();
    let profile = profile();

    view! {
        <section class="text-center px-6 py-16 flex flex-col items-center">
            <img
                src=profile.photo
                alt=profile.name
                width="128"
                height="128"
                class=portfolio.class("w-32 h-32 rounded-full object-cover border-4 mb-6", |t| t.card)
            />
            <h1 class=portfolio.class("text-4xl md:text-5xl font-bold mb-4", |t| t.heading)>
                "Hi, I\u{2019}m "
                <span class=portfolio.class("", |t| t.accent)>{profile.name}</span>
            </h1>
            <p class=portfolio.class("text-lg md:text-xl", |t| t.body)>
                <InlineText runs=profile.tagline />
            </p>
        </section>
    }
}

/// `<h2>` for a content section
#[component]
fn SectionHeading(section: SectionId) -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <h2 class=portfolio.class("text-2xl font-bold mb-4", |t| t.heading)>
            {section.heading()}
        </h2>
    }
}

#[component]
fn About() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <RevealSection section=SectionId::About class=SECTION>
            <SectionHeading section=SectionId::About />
            <p class=portfolio.class("leading-relaxed", |t| t.body)>
                <InlineText runs=profile().about />
            </p>
        </RevealSection>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <RevealSection section=SectionId::Skills class=SECTION>
            <SectionHeading section=SectionId::Skills />
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-6">
                {skill_groups()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class=portfolio.class("p-4 rounded-lg border", |t| t.card)>
                                <h3 class=portfolio.class("font-semibold mb-2", |t| t.accent)>
                                    {group.title}
                                </h3>
                                <ul class=portfolio.class("space-y-1 text-sm", |t| t.body)>
                                    {group.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn Experience() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <RevealSection section=SectionId::Experience class=SECTION>
            <SectionHeading section=SectionId::Experience />
            {experience()
                .into_iter()
                .map(|entry| {
                    view! {
                        <div class=portfolio.class("p-6 rounded-lg border", |t| t.card)>
                            <h3 class=portfolio.class("text-lg font-semibold", |t| t.emphasis)>
                                {entry.organization}
                            </h3>
                            <p class=portfolio.class("text-sm mb-3", |t| t.accent)>
                                {format!("{} | {}", entry.role, entry.duration)}
                            </p>
                            <ul class=portfolio.class("list-disc list-inside space-y-1", |t| t.body)>
                                {entry
                                    .highlights
                                    .into_iter()
                                    .map(|line| view! { <li>{line}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </RevealSection>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <RevealSection section=SectionId::Projects class=SECTION>
            <SectionHeading section=SectionId::Projects />
            <div class="space-y-8">
                {projects()
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let portfolio = use_portfolio();
    let ProjectEntry {
        icon,
        title,
        paragraphs,
        highlights,
        gallery,
    } = project;

    let highlights = (!highlights.is_empty()).then(|| {
        view! {
            <ul class=portfolio.class("list-disc list-inside space-y-2 mt-4", |t| t.body)>
                {highlights
                    .into_iter()
                    .map(|runs| view! { <li><InlineText runs=runs /></li> })
                    .collect_view()}
            </ul>
        }
    });
    let gallery = (!gallery.is_empty()).then(|| view! { <ScreenshotGallery images=gallery /> });

    view! {
        <article class=portfolio.class("p-6 rounded-lg border", |t| t.card)>
            <h3 class=portfolio.class("text-xl font-semibold mb-3", |t| t.emphasis)>
                {format!("{icon} {title}")}
            </h3>
            {paragraphs
                .into_iter()
                .map(|runs| {
                    view! {
                        <p class=portfolio.class("leading-relaxed mb-3", |t| t.body)>
                            <InlineText runs=runs />
                        </p>
                    }
                })
                .collect_view()}
            {highlights}
            {gallery}
        </article>
    }
}

#[component]
fn Growth() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <RevealSection section=SectionId::Growth class=SECTION>
            <SectionHeading section=SectionId::Growth />
            <ul class=portfolio.class("list-disc list-inside space-y-2", |t| t.body)>
                {growth_items().into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </RevealSection>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <RevealSection section=SectionId::Contact class=format!("{SECTION} text-center")>
            <SectionHeading section=SectionId::Contact />
            <p class=portfolio.class("mb-6", |t| t.body)>{CONTACT_BLURB}</p>
            <div class="flex flex-wrap justify-center gap-6">
                {contact_links().into_iter().map(|link| view! { <ContactAnchor link=link /> }).collect_view()}
            </div>
        </RevealSection>
    }
}

/// Mail links stay in the tab; profile links open a new one
#[component]
fn ContactAnchor(link: ContactLink) -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <a
            href=link.href
            target=link.target()
            rel=link.rel()
            class=portfolio.class("transition-colors", |t| t.nav_link)
        >
            {link.label}
        </a>
    }
}
