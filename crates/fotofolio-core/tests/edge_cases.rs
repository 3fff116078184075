//! Edge case and boundary condition tests
//!
//! These tests verify the engine handles unusual inputs, malformed data,
//! and boundary values without ever panicking or surfacing an error to
//! the page: every bad input has a defined terminal rendering.

use serde_json::json;

use fotofolio_core::{
    categories_of, classify, youtube_embed_url, ContentItem, FetchPhase, GalleryFilterState,
    GalleryLoadCoordinator, ItemId, MediaKind, FALLBACK_IMAGE_URL,
};

// ============================================================================
// Malformed Item Tests
// ============================================================================

/// An item with no media fields at all resolves to the placeholder.
#[test]
fn test_bare_item_resolves_to_placeholder() {
    let item = ContentItem::default();
    let resolved = classify(&item);
    assert_eq!(resolved.kind, MediaKind::Unresolvable);
    assert_eq!(resolved.render_ref, FALLBACK_IMAGE_URL);
}

/// All-empty-string media fields behave like absent fields.
#[test]
fn test_empty_string_fields_behave_like_absent() {
    let item = ContentItem {
        id: ItemId::from("x"),
        image: Some(String::new()),
        video_url: Some(String::new()),
        image_url: Some(String::new()),
        youtube_url: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(classify(&item).kind, MediaKind::Unresolvable);
}

/// YouTube URLs that carry no extractable id never produce an embed
/// source ending in garbage; they degrade to the placeholder.
#[test]
fn test_idless_youtube_urls_degrade() {
    let broken = [
        "https://www.youtube.com/watch?v=",
        "https://youtu.be/",
        "youtube.com/watch?v=&t=1",
        "https://www.youtube.com/watch",
        "",
    ];
    for url in broken {
        assert_eq!(youtube_embed_url(url), None, "url: {url:?}");

        let item = ContentItem {
            id: ItemId::from("x"),
            youtube_url: Some(url.to_string()),
            ..Default::default()
        };
        let resolved = classify(&item);
        assert_eq!(resolved.kind, MediaKind::Unresolvable, "url: {url:?}");
        assert!(!resolved.render_ref.is_empty());
    }
}

/// Unusual but matching YouTube forms still embed.
#[test]
fn test_youtube_host_variants() {
    let cases = [
        ("http://youtube.com/watch?v=id1", "id1"),
        ("www.youtube.com/watch?v=id2", "id2"),
        ("YOUTU.BE/id3", "id3"),
        ("https://youtu.be/id4?t=30", "id4?t=30"),
    ];
    for (url, id) in cases {
        assert_eq!(
            youtube_embed_url(url).as_deref(),
            Some(format!("https://www.youtube.com/embed/{id}").as_str()),
            "url: {url:?}"
        );
    }
}

// ============================================================================
// Collection Shape Tests
// ============================================================================

/// Payloads that are neither an array nor a data-wrapped array coerce to
/// an empty Loaded collection, not Failed.
#[test]
fn test_unrecognized_payload_shapes_coerce_to_empty() {
    let shapes = [
        json!(null),
        json!(42),
        json!("string"),
        json!({"items": []}),
        json!({"data": {"nested": []}}),
        json!({"data": null}),
    ];
    for payload in shapes {
        let mut coordinator = GalleryLoadCoordinator::new();
        let generation = coordinator.begin_fetch();
        coordinator.complete_fetch(generation, Ok(payload.clone()));
        assert_eq!(coordinator.phase(), FetchPhase::Loaded, "payload: {payload}");
        assert!(coordinator.collection().is_empty(), "payload: {payload}");
    }
}

/// An array whose items do not deserialize coerces to empty rather than
/// propagating a serde error.
#[test]
fn test_undeserializable_items_coerce_to_empty() {
    let mut coordinator = GalleryLoadCoordinator::new();
    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(generation, Ok(json!(["just", "strings"])));

    assert_eq!(coordinator.phase(), FetchPhase::Loaded);
    assert!(coordinator.collection().is_empty());
}

/// Items keep their API response order through deserialization.
#[test]
fn test_collection_preserves_response_order() {
    let mut coordinator = GalleryLoadCoordinator::new();
    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(
        generation,
        Ok(json!([{"id": "z"}, {"id": "a"}, {"id": "m"}])),
    );

    let ids: Vec<ItemId> = coordinator
        .collection()
        .iter()
        .map(|item| item.id.clone())
        .collect();
    assert_eq!(
        ids,
        vec![ItemId::from("z"), ItemId::from("a"), ItemId::from("m")]
    );
}

// ============================================================================
// Category Boundary Tests
// ============================================================================

/// Empty collection derives the sentinel alone.
#[test]
fn test_categories_of_empty_collection() {
    assert_eq!(categories_of(&[]), vec!["All"]);
}

/// Mixed string/number ids, absent categories, and odd whitespace all
/// survive category derivation and filtering together.
#[test]
fn test_heterogeneous_collection_filters_cleanly() {
    let mut coordinator = GalleryLoadCoordinator::new();
    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(
        generation,
        Ok(json!([
            {"id": 1, "category": "Weddings"},
            {"id": "two"},
            {"id": 3, "category": ""},
            {"id": 4, "category": " Weddings"}
        ])),
    );

    let categories = categories_of(coordinator.collection());
    assert_eq!(categories, vec!["All", "Weddings", "", " Weddings"]);

    let mut filter = GalleryFilterState::new();
    filter.select_category("");
    let visible = filter.visible_items(coordinator.collection());
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].id, ItemId::from("two"));
    assert_eq!(visible[1].id, ItemId::from(3));
}

/// Selecting a category and then reloading into a collection without it
/// still yields an empty subset, not an error.
#[test]
fn test_selection_survives_collection_change() {
    let mut filter = GalleryFilterState::new();
    filter.select_category("Gone");

    let mut coordinator = GalleryLoadCoordinator::new();
    let generation = coordinator.begin_fetch();
    coordinator.complete_fetch(generation, Ok(json!([{"id": 1, "category": "Here"}])));

    assert!(filter.visible_items(coordinator.collection()).is_empty());
    assert_eq!(filter.selected_category(), "Gone");
}
