use folio_core::content::GalleryImage;
use leptos::prelude::*;

use crate::context::use_portfolio;

/// Row of fixed-size phone screenshots
#[component]
pub fn ScreenshotGallery(images: Vec<GalleryImage>) -> impl IntoView {
    let portfolio = use_portfolio();

    view! {
        <div class="flex gap-4 overflow-x-auto mt-6 pb-2">
            {images
                .into_iter()
                .map(|image| {
                    view! {
                        <img
                            src=image.src
                            alt=image.alt
                            width=image.width.to_string()
                            height=image.height.to_string()
                            loading="lazy"
                            class=portfolio.class("rounded-lg border shrink-0 object-cover", |t| t.thumbnail)
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
