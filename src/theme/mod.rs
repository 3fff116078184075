//! Visual theme for the portfolio.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
