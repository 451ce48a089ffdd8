//! Colours and styles for the retro desktop.
//!
//! - `palette` - Raw colour constants and the per-theme accent pair
//! - `styles` - Semantic style and block builders

pub mod palette;
pub mod styles;
