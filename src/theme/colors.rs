//! Color constants for the portfolio palette
//!
//! Dark forest tones with a pink accent.

#![allow(dead_code)]

// === INK (Backgrounds) ===
pub const INK: &str = "#0b0b0b";
pub const INK_LIGHTER: &str = "#141414";
pub const INK_BORDER: &str = "#262626";

// === FOREST (Brand, Gradients) ===
pub const FOREST_DEEP: &str = "#14331f";
pub const FOREST: &str = "#1f5231";
pub const FOREST_BRIGHT: &str = "#4ade80";

// === ACCENT ===
pub const ACCENT_PINK: &str = "#ec4899";
pub const ACCENT_PINK_SOFT: &str = "rgba(236, 72, 153, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f5f5";
pub const TEXT_SECONDARY: &str = "rgba(245, 245, 245, 0.7)";
pub const TEXT_MUTED: &str = "rgba(245, 245, 245, 0.5)";

// === SURFACES ===
pub const CARD_BG: &str = "#ffffff";
pub const CARD_TEXT: &str = "#111111";
pub const OVERLAY: &str = "rgba(0, 0, 0, 0.8)";
