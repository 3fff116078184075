//! Media classification for gallery items
//!
//! Decides what a content item can render as and derives the exact source
//! string the renderer should use. Classification is a pure function of
//! the item with a fixed field precedence, so repeated calls on the same
//! item always agree. Malformed input never fails classification; it
//! degrades to [`MediaKind::Unresolvable`] and the placeholder.

use regex::Regex;
use url::Url;

use crate::types::ContentItem;

/// Placeholder shown when an item carries no renderable media.
pub const FALLBACK_IMAGE_URL: &str = "https://via.placeholder.com/600x400?text=Image+Not+Found";

/// Renderable kind of a single gallery item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Binary image data embedded in the item itself
    EmbeddedImage,
    /// Image hosted at a remote URL
    RemoteImage,
    /// Video file hosted at a remote URL
    RemoteVideo,
    /// YouTube reference rewritten to the /embed/ form
    YouTubeEmbed,
    /// Nothing renderable; the placeholder is shown instead
    Unresolvable,
}

impl MediaKind {
    /// Whether this kind participates in per-item asset load tracking.
    ///
    /// Only actual image fetches have a pending state; videos and YouTube
    /// embeds manage their own buffering, and the placeholder is static.
    pub fn tracks_load_state(&self) -> bool {
        matches!(self, MediaKind::EmbeddedImage | MediaKind::RemoteImage)
    }
}

/// Outcome of classifying one item: the kind plus the source string to
/// hand to an img/video/iframe element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMedia {
    /// Renderable kind
    pub kind: MediaKind,
    /// Source reference for the renderer
    pub render_ref: String,
}

impl ResolvedMedia {
    fn unresolvable() -> Self {
        Self {
            kind: MediaKind::Unresolvable,
            render_ref: FALLBACK_IMAGE_URL.to_string(),
        }
    }
}

/// Classify one content item.
///
/// Field precedence, first non-empty wins:
///
/// 1. embedded image data, wrapped as an inline data-URI source
/// 2. remote video URL, passed through unchanged
/// 3. YouTube-shaped URL (dedicated field, or an image URL pointing at a
///    YouTube host), rewritten to the canonical embed form
/// 4. remote image URL, passed through unchanged when it parses as a URL
/// 5. the fallback placeholder
///
/// A YouTube reference whose video id cannot be extracted resolves to
/// `Unresolvable` rather than an empty embed source.
pub fn classify(item: &ContentItem) -> ResolvedMedia {
    if let Some(data) = non_empty(&item.image) {
        return ResolvedMedia {
            kind: MediaKind::EmbeddedImage,
            render_ref: format!("data:image/jpeg;base64,{data}"),
        };
    }

    if let Some(video) = non_empty(&item.video_url) {
        return ResolvedMedia {
            kind: MediaKind::RemoteVideo,
            render_ref: video.to_string(),
        };
    }

    if let Some(raw) = non_empty(&item.youtube_url) {
        return match youtube_embed_url(raw) {
            Some(embed) => ResolvedMedia {
                kind: MediaKind::YouTubeEmbed,
                render_ref: embed,
            },
            None => ResolvedMedia::unresolvable(),
        };
    }

    if let Some(image) = non_empty(&item.image_url) {
        // An image URL pointing at a YouTube host still embeds.
        if let Some(embed) = youtube_embed_url(image) {
            return ResolvedMedia {
                kind: MediaKind::YouTubeEmbed,
                render_ref: embed,
            };
        }
        if Url::parse(image).is_ok() {
            return ResolvedMedia {
                kind: MediaKind::RemoteImage,
                render_ref: image.to_string(),
            };
        }
        return ResolvedMedia::unresolvable();
    }

    ResolvedMedia::unresolvable()
}

/// Derive the canonical `https://www.youtube.com/embed/<id>` URL.
///
/// Accepts `youtube.com/watch?v=<id>` and `youtu.be/<id>`, case-insensitive,
/// with optional scheme and `www.`. The id runs up to the next `&` or
/// whitespace. Returns `None` when no id can be extracted.
pub fn youtube_embed_url(raw: &str) -> Option<String> {
    let pattern = Regex::new(
        r"(?i)(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([^&\s]+)",
    )
    .ok()?;
    let id = pattern.captures(raw)?.get(1)?.as_str();
    Some(format!("https://www.youtube.com/embed/{id}"))
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
