//! Navigation Header Component
//!
//! Desktop: horizontal header with brand, nav links
//! Mobile: hidden (replaced by MobileNav)

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::mobile_nav::MobileNav;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Gallery,
    About,
    Contact,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Gallery => "Gallery",
            NavLocation::About => "About",
            NavLocation::Contact => "Contact",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Gallery => Route::Gallery {},
            NavLocation::About => Route::About {},
            NavLocation::Contact => Route::Contact {},
        }
    }

    /// All locations in navigation order
    pub fn all() -> [NavLocation; 4] {
        [
            NavLocation::Home,
            NavLocation::Gallery,
            NavLocation::About,
            NavLocation::Contact,
        ]
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation Header component
///
/// - Left: brand link back to the home page
/// - Right: navigation links, current location highlighted
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    rsx! {
        nav { class: "nav-header",
            div { class: "nav-header__inner",
                Link { to: Route::Home {}, class: "nav-brand", "Photography" }

                div { class: "nav-links",
                    for location in NavLocation::all() {
                        Link {
                            to: location.route(),
                            class: if location == props.current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }
            }
        }

        MobileNav { current: props.current }
    }
}
