//! Storefront theme module
//!
//! Defines the versioned theme value, the explicit partial-update merge,
//! the built-in preset/font catalogs, and the linear undo/redo history the
//! appearance editor drives.

pub mod history;
pub mod models;

pub use history::ThemeHistory;
pub use models::{ColorPreset, FontId, ThemeConfig, ThemePatch, COLOR_PRESETS};
