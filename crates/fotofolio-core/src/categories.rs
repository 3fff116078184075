//! Category derivation for the gallery

use crate::types::ContentItem;

/// Synthetic category meaning "no filter applied". Always first in the
/// derived list and never a stored value of its own.
pub const ALL_CATEGORY: &str = "All";

/// Ordered, de-duplicated categories present in a collection.
///
/// One scan in collection order, first occurrence wins, sentinel
/// prepended. Output order is first-appearance order, not alphabetical.
/// Recomputed from scratch on every new fetch; collections are small and
/// full recomputation avoids stale categories after a refetch.
pub fn categories_of(collection: &[ContentItem]) -> Vec<String> {
    let mut categories: Vec<String> = vec![ALL_CATEGORY.to_string()];
    for item in collection {
        let label = item.category_label();
        if !categories.iter().any(|known| known == label) {
            categories.push(label.to_string());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn item(id: i64, category: Option<&str>) -> ContentItem {
        ContentItem {
            id: ItemId::from(id),
            category: category.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_collection_yields_sentinel_only() {
        assert_eq!(categories_of(&[]), vec!["All"]);
    }

    #[test]
    fn test_first_appearance_order() {
        let collection = [
            item(1, Some("Weddings")),
            item(2, Some("Portraits")),
            item(3, Some("Weddings")),
            item(4, Some("Events")),
        ];
        assert_eq!(
            categories_of(&collection),
            vec!["All", "Weddings", "Portraits", "Events"]
        );
    }

    #[test]
    fn test_no_duplicates() {
        let collection = [
            item(1, Some("A")),
            item(2, Some("A")),
            item(3, Some("A")),
        ];
        assert_eq!(categories_of(&collection), vec!["All", "A"]);
    }

    #[test]
    fn test_absent_and_empty_category_form_one_value() {
        let collection = [item(1, None), item(2, Some("")), item(3, Some("Sports"))];
        assert_eq!(categories_of(&collection), vec!["All", "", "Sports"]);
    }

    #[test]
    fn test_case_and_whitespace_distinguish_categories() {
        let collection = [
            item(1, Some("Weddings")),
            item(2, Some("weddings")),
            item(3, Some("Weddings ")),
        ];
        assert_eq!(
            categories_of(&collection),
            vec!["All", "Weddings", "weddings", "Weddings "]
        );
    }

    #[test]
    fn test_stored_all_folds_into_sentinel() {
        // "All" is reserved; an item storing it literally does not produce
        // a second pill.
        let collection = [item(1, Some("All")), item(2, Some("B"))];
        assert_eq!(categories_of(&collection), vec!["All", "B"]);
    }
}
