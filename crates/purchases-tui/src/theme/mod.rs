//! Centralized theme for the purchase-history screen.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions, including status badges
//! - `icons` - Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
