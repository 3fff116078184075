//! Gallery Grid Component
//!
//! Responsive card grid over the visible items. Each card renders its
//! classified media with a title/category caption; clicking a card opens
//! the lightbox. Remote images are fetched through the API client so the
//! load coordinator sees a definite loaded/failed event per asset.

use dioxus::prelude::*;

use fotofolio_core::{classify, ContentItem, ItemId, MediaKind, ResolvedMedia, FALLBACK_IMAGE_URL};

use crate::context::use_api;

#[derive(Props, Clone, PartialEq)]
pub struct GalleryGridProps {
    /// Visible items, already filtered, in collection order
    pub items: Vec<ContentItem>,
    /// Handler called when a card is clicked
    pub on_focus: EventHandler<ContentItem>,
    /// Handler called when an item's image asset rendered
    pub on_asset_loaded: EventHandler<ItemId>,
    /// Handler called when an item's image asset failed and fell back
    pub on_asset_failed: EventHandler<ItemId>,
}

/// Thumbnail grid over the visible collection subset
#[component]
pub fn GalleryGrid(props: GalleryGridProps) -> Element {
    if props.items.is_empty() {
        return rsx! {
            div { class: "gallery-empty", "No work to show in this category yet." }
        };
    }

    rsx! {
        div { class: "gallery-grid",
            for item in props.items.iter() {
                GalleryCard {
                    key: "{item.id}",
                    item: item.clone(),
                    on_click: props.on_focus,
                    on_asset_loaded: props.on_asset_loaded,
                    on_asset_failed: props.on_asset_failed,
                }
            }
        }
    }
}

/// One gallery card: media preview plus caption overlay
#[component]
fn GalleryCard(
    item: ContentItem,
    on_click: EventHandler<ContentItem>,
    on_asset_loaded: EventHandler<ItemId>,
    on_asset_failed: EventHandler<ItemId>,
) -> Element {
    let resolved = classify(&item);
    let clicked = item.clone();

    rsx! {
        div {
            class: "gallery-card",
            onclick: move |_| on_click.call(clicked.clone()),

            CardMedia {
                id: item.id.clone(),
                title: item.display_title().to_string(),
                resolved: resolved,
                on_asset_loaded: on_asset_loaded,
                on_asset_failed: on_asset_failed,
            }

            div { class: "gallery-card__caption",
                h3 { class: "gallery-card__title", "{item.display_title()}" }
                p { class: "gallery-card__category", "{item.category_label()}" }
            }
        }
    }
}

/// Renders the classified media of one card
#[component]
fn CardMedia(
    id: ItemId,
    title: String,
    resolved: ResolvedMedia,
    on_asset_loaded: EventHandler<ItemId>,
    on_asset_failed: EventHandler<ItemId>,
) -> Element {
    match resolved.kind {
        MediaKind::EmbeddedImage => rsx! {
            EmbeddedImageView {
                id: id,
                uri: resolved.render_ref,
                alt: title,
                on_asset_loaded: on_asset_loaded,
            }
        },
        MediaKind::RemoteImage => rsx! {
            RemoteImageView {
                id: id,
                url: resolved.render_ref,
                alt: title,
                on_asset_loaded: on_asset_loaded,
                on_asset_failed: on_asset_failed,
            }
        },
        MediaKind::RemoteVideo => rsx! {
            video {
                class: "gallery-card__media",
                src: "{resolved.render_ref}",
                controls: true,
            }
        },
        MediaKind::YouTubeEmbed => rsx! {
            iframe {
                class: "gallery-card__media",
                src: "{resolved.render_ref}",
                title: "{title}",
                allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                allowfullscreen: true,
            }
        },
        MediaKind::Unresolvable => rsx! {
            img {
                class: "gallery-card__media",
                src: "{resolved.render_ref}",
                alt: "Fallback",
            }
        },
    }
}

/// Embedded image data is already displayable; it counts as loaded as
/// soon as the card mounts.
#[component]
fn EmbeddedImageView(
    id: ItemId,
    uri: String,
    alt: String,
    on_asset_loaded: EventHandler<ItemId>,
) -> Element {
    let mounted_id = id.clone();
    use_effect(move || {
        on_asset_loaded.call(mounted_id.clone());
    });

    rsx! {
        img {
            class: "gallery-card__media",
            src: "{uri}",
            alt: "{alt}",
        }
    }
}

/// Asynchronously fetch and display a remote image
///
/// Shows a spinner while the bytes are in flight; on failure the
/// placeholder is swapped in and the asset is reported as fallen back.
#[component]
fn RemoteImageView(
    id: ItemId,
    url: String,
    alt: String,
    on_asset_loaded: EventHandler<ItemId>,
    on_asset_failed: EventHandler<ItemId>,
) -> Element {
    let api = use_api();
    let mut image_data = use_signal(|| Option::<String>::None);

    let asset_id = id.clone();
    let asset_url = url.clone();
    use_effect(move || {
        let id = asset_id.clone();
        let url = asset_url.clone();
        spawn(async move {
            let shared = api();
            let guard = shared.read().await;

            let Some(ref client) = *guard else {
                return;
            };

            match client.fetch_image_data_uri(&url).await {
                Ok(uri) => {
                    image_data.set(Some(uri));
                    on_asset_loaded.call(id);
                }
                Err(e) => {
                    tracing::warn!("Failed to load image asset: {}", e);
                    image_data.set(Some(FALLBACK_IMAGE_URL.to_string()));
                    on_asset_failed.call(id);
                }
            }
        });
    });

    rsx! {
        if let Some(uri) = image_data() {
            img {
                class: "gallery-card__media",
                src: "{uri}",
                alt: "{alt}",
            }
        } else {
            div { class: "gallery-card__loading",
                div { class: "loading-spinner" }
                "Loading..."
            }
        }
    }
}
