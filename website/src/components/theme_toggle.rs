use folio_app::Message;
use leptos::prelude::*;

use super::icons::{Moon, Sun};
use crate::context::use_portfolio;

/// Switches between the dark and light palettes
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let portfolio = use_portfolio();

    let label = move || {
        if portfolio.theme().is_dark() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };

    view! {
        <button
            type="button"
            on:click=move |_| portfolio.dispatch(Message::ToggleTheme)
            class=portfolio.class("p-2 rounded-full transition-colors", |t| t.toggle_button)
            aria-label=label
            title=label
        >
            {move || {
                if portfolio.theme().is_dark() {
                    view! { <Sun class="w-4 h-4" /> }.into_any()
                } else {
                    view! { <Moon class="w-4 h-4" /> }.into_any()
                }
            }}
        </button>
    }
}
