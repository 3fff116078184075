//! Core types for the Fotofolio gallery engine

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a content item
///
/// The content API is loosely typed and emits ids either as JSON strings
/// or as numbers. Both forms deserialize into the same key type, so an id
/// can serve as the rendering key and as the key of the per-item asset
/// load state map. Ids are expected to be unique within one collection
/// snapshot; the engine does not deduplicate them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// String-typed id
    Text(String),
    /// Numeric id
    Number(i64),
}

impl Default for ItemId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemId::Text(s) => write!(f, "{}", s),
            ItemId::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// One entry of the gallery collection as supplied by the content API
///
/// The schema is loosely enforced: every field is optional (a missing id
/// becomes the empty string id), unknown fields are ignored, and the API's
/// historical camelCase spellings are accepted as aliases. An item may
/// populate more than one media field; which one renders is decided by the
/// classifier's fixed precedence order, not by this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique id, stable per item, used as the rendering key
    #[serde(default)]
    pub id: ItemId,

    /// Display title
    #[serde(default)]
    pub title: Option<String>,

    /// Collection-wide grouping key. Absent and empty both form their own
    /// category value (the empty label), never coerced to "All".
    #[serde(default)]
    pub category: Option<String>,

    /// Embedded image data: base64 without the data-URI prefix
    #[serde(default)]
    pub image: Option<String>,

    /// Remote video file URL
    #[serde(default, alias = "videoUrl", alias = "videoURL")]
    pub video_url: Option<String>,

    /// Remote image URL
    #[serde(default, alias = "imageUrl", alias = "imageURL")]
    pub image_url: Option<String>,

    /// YouTube watch/short URL
    #[serde(default, alias = "youtubeUrl", alias = "youtubeURL")]
    pub youtube_url: Option<String>,
}

impl ContentItem {
    /// Category value used for grouping and filtering.
    ///
    /// Missing and empty categories collapse to the same empty label,
    /// which is a distinct category of its own.
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// Title for display, empty when the API supplied none.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Photographer profile served by the content API for the About page
///
/// Same loose-schema treatment as [`ContentItem`]: everything optional,
/// camelCase aliases accepted, absence tolerated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Embedded avatar: base64 without the data-URI prefix
    #[serde(default, alias = "profilepicture", alias = "profilePicture")]
    pub profile_picture: Option<String>,

    /// Short biography text
    #[serde(default)]
    pub bio: Option<String>,

    /// Contact email address
    #[serde(default)]
    pub email: Option<String>,

    /// Contact phone number
    #[serde(default, alias = "contactNo")]
    pub contact_no: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_accepts_string_and_number() {
        let text: ItemId = serde_json::from_str("\"a1\"").unwrap();
        assert_eq!(text, ItemId::Text("a1".to_string()));

        let number: ItemId = serde_json::from_str("7").unwrap();
        assert_eq!(number, ItemId::Number(7));
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId::from("abc").to_string(), "abc");
        assert_eq!(ItemId::from(42).to_string(), "42");
    }

    #[test]
    fn test_content_item_accepts_camel_case_aliases() {
        let item: ContentItem = serde_json::from_str(
            r#"{"id":1,"category":"Weddings","imageUrl":"https://x/1.jpg","youtubeURL":"https://youtu.be/abc"}"#,
        )
        .unwrap();
        assert_eq!(item.image_url.as_deref(), Some("https://x/1.jpg"));
        assert_eq!(item.youtube_url.as_deref(), Some("https://youtu.be/abc"));
    }

    #[test]
    fn test_content_item_tolerates_missing_fields() {
        let item: ContentItem = serde_json::from_str("{}").unwrap();
        assert_eq!(item.id, ItemId::Text(String::new()));
        assert_eq!(item.category_label(), "");
        assert_eq!(item.display_title(), "");
    }

    #[test]
    fn test_content_item_ignores_unknown_fields() {
        let item: ContentItem =
            serde_json::from_str(r#"{"id":"x","futureField":{"nested":true}}"#).unwrap();
        assert_eq!(item.id, ItemId::from("x"));
    }

    #[test]
    fn test_profile_aliases() {
        let profile: Profile = serde_json::from_str(
            r#"{"profilepicture":"QUJD","bio":"hi","email":"a@b.c","contactNo":"123"}"#,
        )
        .unwrap();
        assert_eq!(profile.profile_picture.as_deref(), Some("QUJD"));
        assert_eq!(profile.contact_no.as_deref(), Some("123"));
    }
}
