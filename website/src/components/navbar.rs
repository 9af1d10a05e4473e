use folio_app::Message;
use folio_core::content::profile;
use folio_core::{NavTarget, SectionId};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::icons::{Menu, X};
use super::theme_toggle::ThemeToggle;
use crate::context::use_portfolio;

#[component]
pub fn Navbar() -> impl IntoView {
    let portfolio = use_portfolio();
    let name = profile().name;

    let go_home = move |ev: MouseEvent| {
        ev.prevent_default();
        portfolio.dispatch(Message::NavLinkActivated(NavTarget::Home));
    };

    view! {
        <header class=portfolio.class(
            "fixed top-0 left-0 right-0 z-50 backdrop-blur-md border-b transition-colors",
            |t| t.nav,
        )>
            <div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <a
                    href="#"
                    on:click=go_home
                    class=portfolio.class("text-xl font-bold", |t| t.accent)
                >
                    {name}
                </a>

                <div class="flex items-center gap-4">
                    <nav class="hidden md:flex items-center space-x-5 text-sm">
                        <NavLinks item_class="transition-colors" />
                    </nav>

                    <ThemeToggle />

                    // Mobile Menu Toggle
                    <button
                        type="button"
                        on:click=move |_| portfolio.dispatch(Message::ToggleMenu)
                        class=portfolio.class("md:hidden p-2 rounded-md", |t| t.nav_link)
                        aria-label="Toggle navigation menu"
                        aria-controls="mobile-menu"
                        aria-expanded=move || portfolio.menu_open().to_string()
                    >
                        {move || {
                            if portfolio.menu_open() {
                                view! { <X class="w-5 h-5" /> }.into_any()
                            } else {
                                view! { <Menu class="w-5 h-5" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || portfolio.menu_open()>
                <nav
                    id="mobile-menu"
                    class=portfolio.class("md:hidden border-t px-4 py-3 flex flex-col space-y-3 text-sm", |t| t.mobile_menu)
                >
                    <NavLinks item_class="block py-1 transition-colors" />
                </nav>
            </Show>
        </header>
    }
}

/// One anchor per content section, in page order
#[component]
fn NavLinks(item_class: &'static str) -> impl IntoView {
    let portfolio = use_portfolio();

    SectionId::ALL
        .into_iter()
        .map(|section| {
            let on_click = move |ev: MouseEvent| {
                ev.prevent_default();
                portfolio.dispatch(Message::NavLinkActivated(section.into()));
            };

            view! {
                <a
                    href=section.href()
                    on:click=on_click
                    class=portfolio.class(item_class, |t| t.nav_link)
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view()
}
