//! storeforge - headless state core for a store-builder admin studio
//!
//! Owns the state the admin screens render: a versioned storefront theme
//! with linear undo/redo history, in-memory product/customer/order catalogs
//! with derived dashboard stats, and a template "stylist" that proposes
//! restyles. A single `StudioSession` ties them together for one UI actor;
//! all operations are synchronous and single-threaded by construction.
//!
//! Nothing here renders, persists, or talks to a network - those concerns
//! belong to the presentation layer consuming this crate.

// Module declarations
pub mod catalog;
pub mod error;
pub mod session;
pub mod stylist;
pub mod theme;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, StoreforgeError};
pub use session::{StudioSession, ThemeView};
pub use theme::{ThemeConfig, ThemeHistory, ThemePatch};
