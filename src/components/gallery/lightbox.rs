//! Lightbox Component
//!
//! Full-screen modal for the focused item. Clicking the backdrop
//! dismisses; clicking the media itself does not.

use dioxus::prelude::*;

use fotofolio_core::{classify, ContentItem, MediaKind};

#[derive(Props, Clone, PartialEq)]
pub struct LightboxProps {
    /// The focused item to display
    pub item: ContentItem,
    /// Callback when the lightbox is dismissed
    pub on_dismiss: EventHandler<()>,
}

/// Full-screen focused view of one gallery item
#[component]
pub fn Lightbox(props: LightboxProps) -> Element {
    let resolved = classify(&props.item);
    let title = props.item.display_title().to_string();

    let media = match resolved.kind {
        MediaKind::EmbeddedImage | MediaKind::RemoteImage | MediaKind::Unresolvable => rsx! {
            img {
                class: "lightbox__media",
                src: "{resolved.render_ref}",
                alt: "{title}",
            }
        },
        MediaKind::RemoteVideo => rsx! {
            video {
                class: "lightbox__media",
                src: "{resolved.render_ref}",
                controls: true,
                autoplay: true,
            }
        },
        MediaKind::YouTubeEmbed => rsx! {
            iframe {
                class: "lightbox__media lightbox__media--frame",
                src: "{resolved.render_ref}",
                title: "{title}",
                allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                allowfullscreen: true,
            }
        },
    };

    rsx! {
        div {
            class: "lightbox-overlay",
            onclick: move |_| props.on_dismiss.call(()),

            div {
                class: "lightbox-content",
                onclick: move |event| event.stop_propagation(),
                {media}
            }
        }
    }
}
