use folio_core::content::copyright_notice;
use leptos::prelude::*;

use crate::context::use_portfolio;

#[component]
pub fn Footer() -> impl IntoView {
    let portfolio = use_portfolio();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class=portfolio.class("border-t py-6 text-center text-sm", |t| t.footer)>
            {copyright_notice(year)}
        </footer>
    }
}
