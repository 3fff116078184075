//! About page - photographer profile.
//!
//! Static prose plus the profile record fetched from the content API;
//! the avatar only renders when the API supplied one.

use dioxus::prelude::*;

use fotofolio_core::Profile;

use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_services_ready};

/// About page component
#[component]
pub fn About() -> Element {
    let api = use_api();
    let services_ready = use_services_ready();

    let mut profile: Signal<Option<Profile>> = use_signal(|| None);

    // Load the profile when the API client is up
    use_effect(move || {
        if services_ready() {
            spawn(async move {
                let shared = api();
                let guard = shared.read().await;
                let Some(ref client) = *guard else {
                    return;
                };

                match client.fetch_profile().await {
                    Ok(fetched) => {
                        profile.set(fetched);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load profile: {}", e);
                    }
                }
            });
        }
    });

    let avatar_uri = profile
        .read()
        .as_ref()
        .and_then(|p| p.profile_picture.clone())
        .filter(|data| !data.is_empty())
        .map(|data| format!("data:image/jpeg;base64,{data}"));

    let bio = profile.read().as_ref().and_then(|p| p.bio.clone());

    rsx! {
        div { class: "page about-page",
            NavHeader { current: NavLocation::About }

            main { class: "about-main",
                div { class: "about-card",
                    h2 { class: "page-title", "About Me" }

                    p { class: "about-prose",
                        "Hi, I'm "
                        span { class: "about-name", "Karnveer" }
                        ", a passionate professional photographer with over 8 years of "
                        "experience capturing life's most beautiful moments. Whether it's a "
                        "wedding, a corporate event, or a personal portrait session, my goal "
                        "is to tell your story through powerful imagery."
                    }

                    if let Some(extra) = bio {
                        p { class: "about-prose about-prose--bio", "{extra}" }
                    }

                    if let Some(uri) = avatar_uri {
                        div { class: "about-avatar",
                            img {
                                class: "about-avatar__img",
                                src: "{uri}",
                                alt: "Profile",
                            }
                            p { class: "about-avatar__caption",
                                "Capturing stories, not just pictures."
                            }
                        }
                    }
                }
            }
        }
    }
}
