//! Document head: title, description, Open Graph card and favicon

use folio_core::PageMetadata;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

#[component]
pub fn SiteMeta(metadata: PageMetadata) -> impl IntoView {
    let keywords = metadata.keywords_content();
    let og = metadata.open_graph;

    let image = og.image.map(|image| {
        view! {
            <Meta property="og:image" content=image.url />
            <Meta property="og:image:width" content=image.width.to_string() />
            <Meta property="og:image:height" content=image.height.to_string() />
            <Meta property="og:image:alt" content=image.alt />
        }
    });

    view! {
        <Title text=metadata.title />
        <Meta name="description" content=metadata.description />
        <Meta name="keywords" content=keywords />
        <Meta name="author" content=metadata.author />

        <Meta property="og:title" content=og.title />
        <Meta property="og:description" content=og.description />
        <Meta property="og:url" content=og.url />
        <Meta property="og:site_name" content=og.site_name />
        <Meta property="og:locale" content=og.locale />
        <Meta property="og:type" content=og.kind />
        {image}

        <Link rel="icon" href=metadata.favicon />
    }
}
