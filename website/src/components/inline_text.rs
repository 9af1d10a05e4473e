use folio_core::content::Inline;
use leptos::prelude::*;

use crate::context::use_portfolio;

/// Render a paragraph's runs; the caller supplies the wrapping element
#[component]
pub fn InlineText(runs: Vec<Inline>) -> impl IntoView {
    let portfolio = use_portfolio();

    runs.into_iter()
        .map(|run| match run {
            Inline::Text(text) => text.into_any(),
            Inline::Strong(text) => view! {
                <span class=portfolio.class("font-semibold", |t| t.emphasis)>{text}</span>
            }
            .into_any(),
            Inline::Link { text, href } => view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class=portfolio.class("underline underline-offset-2", |t| t.accent)
                >
                    {text}
                </a>
            }
            .into_any(),
        })
        .collect_view()
}
