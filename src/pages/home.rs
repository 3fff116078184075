//! Home page - hero entry point into the portfolio.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::theme::colors;

/// Home page component with the hero banner and a call to action
/// leading into the gallery.
#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    let view_work = move |_| {
        navigator.push(Route::Gallery {});
    };

    rsx! {
        div { class: "page home-page",
            NavHeader { current: NavLocation::Home }

            main {
                class: "home-hero",
                style: format!(
                    "background: linear-gradient(135deg, {} 0%, {} 55%, {} 100%);",
                    colors::INK, colors::FOREST_DEEP, colors::FOREST
                ),

                div { class: "home-hero__inner",
                    h1 { class: "hero-title", "Capturing Stories Through the Lens" }
                    p { class: "hero-tagline",
                        "Welcome to the official portfolio of "
                        span { class: "hero-name", "Karnveer Bhamare" }
                        " — where every frame tells a story, and every moment is immortalized."
                    }

                    button {
                        class: "btn-primary",
                        onclick: view_work,
                        "View My Work"
                    }
                }
            }
        }
    }
}
