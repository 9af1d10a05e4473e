//! Entrance animation driven by `IntersectionObserver`

use folio_app::Message;
use folio_core::prelude::*;
use folio_core::SectionId;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::context::{use_portfolio, Portfolio};

const HIDDEN: &str = "opacity-0 translate-y-8";
const SHOWN: &str = "opacity-100 translate-y-0";

/// A content section that fades in the first time it scrolls into view
#[component]
pub fn RevealSection(
    section: SectionId,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let portfolio = use_portfolio();
    let node = NodeRef::<html::Section>::new();
    let revealed = Memo::new(move |_| portfolio.is_revealed(section));

    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };
        if portfolio.is_revealed_untracked(section) {
            return;
        }
        if let Err(e) = observe(portfolio, section, &element) {
            // No observer support; show the content rather than hide it forever
            warn!("IntersectionObserver unavailable for #{}: {:?}", section, e);
            portfolio.dispatch(Message::SectionIntersected {
                section,
                is_intersecting: true,
            });
        }
    });

    let class = move || {
        let state = if revealed.get() { SHOWN } else { HIDDEN };
        format!("{class} transition-all duration-700 ease-out {state}")
    };

    view! {
        <section id=section.anchor() node_ref=node class=class>
            {children()}
        </section>
    }
}

fn observe(
    portfolio: Portfolio,
    section: SectionId,
    element: &web_sys::Element,
) -> std::result::Result<(), JsValue> {
    let settings = portfolio.reveal_settings();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                portfolio.dispatch(Message::SectionIntersected {
                    section,
                    is_intersecting: entry.is_intersecting(),
                });
            }
            if portfolio.is_revealed_untracked(section) {
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.threshold));
    options.set_root_margin(&settings.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    // Owned by the observer from here on
    callback.forget();
    Ok(())
}
