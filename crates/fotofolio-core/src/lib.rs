//! Fotofolio Core Library
//!
//! Media resolution and filtering engine for a photographer's portfolio
//! gallery.
//!
//! ## Overview
//!
//! The gallery collection comes from a loosely-typed remote content API.
//! Each item may carry embedded image data, a remote image URL, a remote
//! video URL, or a YouTube link; this crate decides what each item renders
//! as, derives embeddable URLs, partitions the collection into categories,
//! tracks the live filter and lightbox state, and drives the fetch
//! lifecycle. The design principle throughout is total graceful
//! degradation: every malformed input has a defined, non-panicking
//! terminal rendering.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fotofolio_core::{
//!     categories_of, classify, ApiConfig, GalleryFilterState,
//!     GalleryLoadCoordinator, PortfolioApi,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = PortfolioApi::new(ApiConfig::from_env())?;
//!
//!     let mut loader = GalleryLoadCoordinator::new();
//!     let generation = loader.begin_fetch();
//!     loader.complete_fetch(generation, api.fetch_gallery().await);
//!
//!     let categories = categories_of(loader.collection());
//!     println!("categories: {categories:?}");
//!
//!     let mut filter = GalleryFilterState::new();
//!     filter.select_category("Weddings");
//!     for item in filter.visible_items(loader.collection()) {
//!         println!("{}: {:?}", item.display_title(), classify(item).kind);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod categories;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod mailer;
pub mod media;
pub mod types;

// Re-exports
pub use api::PortfolioApi;
pub use categories::{categories_of, ALL_CATEGORY};
pub use config::{ApiConfig, MailConfig};
pub use error::{PortfolioError, PortfolioResult};
pub use filter::GalleryFilterState;
pub use loader::{AssetLoadState, FetchPhase, GalleryLoadCoordinator};
pub use mailer::{ContactMessage, MailRelay};
pub use media::{classify, youtube_embed_url, MediaKind, ResolvedMedia, FALLBACK_IMAGE_URL};
pub use types::{ContentItem, ItemId, Profile};
