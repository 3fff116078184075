//! Category Pills Component
//!
//! Horizontal row of category filter pills derived from the collection.

use dioxus::prelude::*;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Categories in display order ("All" first)
    pub categories: Vec<String>,
    /// Currently selected category
    pub selected: String,
    /// Handler called when a category is selected
    pub on_select: EventHandler<String>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryPills {
///         categories: categories_of(collection),
///         selected: filter.read().selected_category().to_string(),
///         on_select: move |category| filter.write().select_category(category),
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Category selection",
            for category in props.categories.iter() {
                {
                    let value = category.clone();
                    let is_selected = selected == *category;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{category}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(value.clone());
                            },
                            "{category}"
                        }
                    }
                }
            }
        }
    }
}
