//! Gallery components
//!
//! Category filter pills, the media card grid, and the lightbox modal.

mod category_pills;
mod gallery_grid;
mod lightbox;

pub use category_pills::CategoryPills;
pub use gallery_grid::GalleryGrid;
pub use lightbox::Lightbox;
