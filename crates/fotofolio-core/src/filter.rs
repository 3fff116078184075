//! Gallery selection and focus state
//!
//! Holds the selected category and the item open in the lightbox, and
//! derives the visible subset of a collection. The two pieces of state
//! are orthogonal: selecting a category never touches the focused item
//! and focusing never touches the selection.

use crate::categories::ALL_CATEGORY;
use crate::types::ContentItem;

/// Live filter state of the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryFilterState {
    selected_category: String,
    focused: Option<ContentItem>,
}

impl Default for GalleryFilterState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORY.to_string(),
            focused: None,
        }
    }
}

impl GalleryFilterState {
    /// Fresh state: "All" selected, nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected category.
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Select a category unconditionally.
    ///
    /// No validation against the derived category list; selecting a
    /// category with zero matching items is valid and yields an empty
    /// visible subset, not an error.
    pub fn select_category(&mut self, name: impl Into<String>) {
        self.selected_category = name.into();
    }

    /// Items visible under the current selection, in collection order.
    ///
    /// "All" passes the collection through unchanged; any other selection
    /// keeps the items whose category matches exactly (case-sensitive,
    /// untrimmed). The partition is stable.
    pub fn visible_items<'a>(&self, collection: &'a [ContentItem]) -> Vec<&'a ContentItem> {
        if self.selected_category == ALL_CATEGORY {
            return collection.iter().collect();
        }
        collection
            .iter()
            .filter(|item| item.category_label() == self.selected_category)
            .collect()
    }

    /// Open an item in the lightbox.
    ///
    /// Membership in the collection is the caller's concern; items are
    /// only ever focused from the rendered visible set.
    pub fn focus(&mut self, item: ContentItem) {
        self.focused = Some(item);
    }

    /// Close the lightbox. Idempotent.
    pub fn dismiss(&mut self) {
        self.focused = None;
    }

    /// The item currently open in the lightbox, if any.
    pub fn focused(&self) -> Option<&ContentItem> {
        self.focused.as_ref()
    }

    /// Drop a focused item whose id is no longer part of the collection.
    ///
    /// Called after a refetch so the lightbox never points at an item
    /// outside the current collection snapshot.
    pub fn revalidate_focus(&mut self, collection: &[ContentItem]) {
        if let Some(ref focused) = self.focused {
            if !collection.iter().any(|item| item.id == focused.id) {
                self.focused = None;
            }
        }
    }
}
