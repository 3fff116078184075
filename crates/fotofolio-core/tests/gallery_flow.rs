//! End-to-end flows through the gallery engine
//!
//! Exercises the full path a gallery page takes: fetch outcome into the
//! coordinator, categories derived from the collection, selection into a
//! visible subset, classification of what each visible item renders as,
//! and the lightbox focus cycle.

use serde_json::json;

use fotofolio_core::{
    categories_of, classify, AssetLoadState, FetchPhase, GalleryFilterState,
    GalleryLoadCoordinator, ItemId, MediaKind, PortfolioError,
};

/// The canonical two-item scenario: categories, selection, classification.
#[test]
fn test_filter_and_classify_scenario() {
    let mut coordinator = GalleryLoadCoordinator::new();
    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(
        generation,
        Ok(json!([
            {"id": 1, "category": "Weddings", "imageUrl": "https://x/1.jpg"},
            {"id": 2, "category": "Portraits", "youtubeURL": "https://youtu.be/abc123"}
        ])),
    );

    let categories = categories_of(coordinator.collection());
    assert_eq!(categories, vec!["All", "Weddings", "Portraits"]);

    let mut filter = GalleryFilterState::new();
    filter.select_category("Portraits");
    let visible = filter.visible_items(coordinator.collection());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, ItemId::from(2));

    let resolved = classify(visible[0]);
    assert_eq!(resolved.kind, MediaKind::YouTubeEmbed);
    assert_eq!(resolved.render_ref, "https://www.youtube.com/embed/abc123");
}

/// A `{data: [...]}` wrapper reaches Loaded with the inner array.
#[test]
fn test_wrapped_payload_reaches_loaded() {
    let mut coordinator = GalleryLoadCoordinator::new();
    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(
        generation,
        Ok(json!({"data": [
            {"id": "a", "category": "Weddings", "image": "QUJD"},
            {"id": "b", "category": "Weddings", "videoUrl": "https://x/v.mp4"}
        ]})),
    );

    assert_eq!(coordinator.phase(), FetchPhase::Loaded);
    assert_eq!(coordinator.collection().len(), 2);
}

/// A rejected fetch reaches Failed with an empty visible collection and
/// no panic anywhere along the way.
#[test]
fn test_failed_fetch_leaves_empty_gallery() {
    let mut coordinator = GalleryLoadCoordinator::new();
    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(generation, Err(PortfolioError::Api { status: 502 }));

    assert_eq!(coordinator.phase(), FetchPhase::Failed);

    let filter = GalleryFilterState::new();
    assert!(filter.visible_items(coordinator.collection()).is_empty());
    assert_eq!(categories_of(coordinator.collection()), vec!["All"]);
}

/// Refetch with a different collection drops a now-dangling lightbox focus
/// and rebuilds load state for the new items.
#[test]
fn test_refetch_revalidates_focus_and_load_state() {
    let mut coordinator = GalleryLoadCoordinator::new();
    let mut filter = GalleryFilterState::new();

    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(
        generation,
        Ok(json!([{"id": 1, "category": "Weddings", "image": "QUJD"}])),
    );
    filter.focus(coordinator.collection()[0].clone());
    coordinator.mark_asset_loaded(&ItemId::from(1));

    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(
        generation,
        Ok(json!([{"id": 2, "category": "Events", "imageUrl": "https://x/2.jpg"}])),
    );
    filter.revalidate_focus(coordinator.collection());

    assert!(filter.focused().is_none());
    assert_eq!(coordinator.load_state(&ItemId::from(1)), None);
    assert_eq!(
        coordinator.load_state(&ItemId::from(2)),
        Some(AssetLoadState::Loading)
    );
}

/// The focus/dismiss cycle never disturbs selection or the visible set,
/// and every image asset ends in a terminal, displayable state.
#[test]
fn test_lightbox_cycle_and_asset_settlement() {
    let mut coordinator = GalleryLoadCoordinator::new();
    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(
        generation,
        Ok(json!([
            {"id": 1, "category": "Weddings", "image": "QUJD"},
            {"id": 2, "category": "Weddings", "imageUrl": "https://x/2.jpg"}
        ])),
    );

    let mut filter = GalleryFilterState::new();
    filter.select_category("Weddings");
    let before: Vec<ItemId> = filter
        .visible_items(coordinator.collection())
        .iter()
        .map(|item| item.id.clone())
        .collect();

    let second = coordinator.collection()[1].clone();
    filter.focus(second);
    filter.dismiss();

    let after: Vec<ItemId> = filter
        .visible_items(coordinator.collection())
        .iter()
        .map(|item| item.id.clone())
        .collect();
    assert_eq!(before, after);
    assert_eq!(filter.selected_category(), "Weddings");

    // One asset renders, the other fails onto the placeholder; both are
    // terminal and the gallery is settled.
    coordinator.mark_asset_loaded(&ItemId::from(1));
    coordinator.mark_asset_failed(&ItemId::from(2));
    assert!(!coordinator.any_asset_pending());
}
