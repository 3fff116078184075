//! Gallery page - category-filtered media grid with lightbox.
//!
//! Owns the three engine pieces for the gallery view: the load
//! coordinator (fetch lifecycle + per-asset state), the filter state
//! (selection + focus), and the derived category list. All mutation
//! happens in reaction to discrete events: the fetch completing, a pill
//! click, a card click, a dismiss.

use dioxus::prelude::*;

use fotofolio_core::{
    categories_of, ContentItem, FetchPhase, GalleryFilterState, GalleryLoadCoordinator, ItemId,
};

use crate::components::gallery::{CategoryPills, GalleryGrid, Lightbox};
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_services_ready};

/// Gallery page component
#[component]
pub fn Gallery() -> Element {
    let api = use_api();
    let services_ready = use_services_ready();

    let mut loader: Signal<GalleryLoadCoordinator> = use_signal(GalleryLoadCoordinator::new);
    let mut filter: Signal<GalleryFilterState> = use_signal(GalleryFilterState::new);

    // Fetch the collection once the API client is up
    use_effect(move || {
        if services_ready() {
            spawn(async move {
                let shared = api();
                let guard = shared.read().await;
                let Some(ref client) = *guard else {
                    return;
                };

                let generation = loader.write().begin_fetch();
                let outcome = client.fetch_gallery().await;

                let mut coordinator = loader.write();
                coordinator.complete_fetch(generation, outcome);
                filter.write().revalidate_focus(coordinator.collection());
                tracing::info!(
                    items = coordinator.collection().len(),
                    "gallery collection loaded"
                );
            });
        }
    });

    // Derive the render inputs from the engine state
    let collection: Vec<ContentItem> = loader.read().collection().to_vec();
    let categories = categories_of(&collection);
    let selected = filter.read().selected_category().to_string();
    let visible: Vec<ContentItem> = filter
        .read()
        .visible_items(&collection)
        .into_iter()
        .cloned()
        .collect();
    let focused = filter.read().focused().cloned();
    let fetching = matches!(
        loader.read().phase(),
        FetchPhase::Idle | FetchPhase::Loading
    );
    let settling = loader.read().any_asset_pending();

    rsx! {
        div { class: "page gallery-page",
            NavHeader { current: NavLocation::Gallery }

            main { class: "gallery-main",
                h2 { class: "page-title", "Reference Work" }

                CategoryPills {
                    categories: categories,
                    selected: selected,
                    on_select: move |category: String| filter.write().select_category(category),
                }

                if fetching {
                    div { class: "loading-state",
                        div { class: "loading-spinner" }
                        p { "Loading gallery..." }
                    }
                } else {
                    GalleryGrid {
                        items: visible,
                        on_focus: move |item: ContentItem| filter.write().focus(item),
                        on_asset_loaded: move |id: ItemId| loader.write().mark_asset_loaded(&id),
                        on_asset_failed: move |id: ItemId| loader.write().mark_asset_failed(&id),
                    }

                    if settling {
                        p { class: "gallery-settling", "Fetching full-size previews..." }
                    }
                }
            }

            if let Some(item) = focused {
                Lightbox {
                    item: item,
                    on_dismiss: move |_| filter.write().dismiss(),
                }
            }
        }
    }
}
