//! Mobile Navigation Component
//!
//! Bottom navigation bar for narrow windows (< 768px).

use dioxus::prelude::*;

use crate::components::nav_header::NavLocation;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Current active location
    pub current: NavLocation,
}

/// Mobile bottom navigation bar
///
/// Replaces the header on screens < 768px.
/// Shows: Home | Gallery | About | Contact
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    rsx! {
        nav { class: "mobile-nav",
            for location in NavLocation::all() {
                Link {
                    to: location.route(),
                    class: if location == props.current { "mobile-nav-item active" } else { "mobile-nav-item" },

                    span { class: "mobile-nav-icon",
                        {render_nav_icon(location)}
                    }

                    span { class: "mobile-nav-label", "{location.display_name()}" }
                }
            }
        }
    }
}

/// Render Lucide icon for navigation location
fn render_nav_icon(location: NavLocation) -> Element {
    match location {
        NavLocation::Home => rsx! {
            // Lucide house icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
                path { d: "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" }
            }
        },
        NavLocation::Gallery => rsx! {
            // Lucide image icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { width: "18", height: "18", x: "3", y: "3", rx: "2", ry: "2" }
                circle { cx: "9", cy: "9", r: "2" }
                path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
            }
        },
        NavLocation::About => rsx! {
            // Lucide user icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                circle { cx: "12", cy: "8", r: "5" }
                path { d: "M20 21a8 8 0 0 0-16 0" }
            }
        },
        NavLocation::Contact => rsx! {
            // Lucide mail icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
                path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
            }
        },
    }
}
