//! UI components for the portfolio.

pub mod gallery;
mod mobile_nav;
mod nav_header;

pub use mobile_nav::MobileNav;
pub use nav_header::{NavHeader, NavLocation};
