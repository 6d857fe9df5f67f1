//! Studio session
//!
//! `StudioSession` is the explicitly owned replacement for the admin UI's
//! ambient component state: it holds the theme history and the three
//! catalogs and exposes the operations the screens wire to. One session
//! belongs to one UI actor; everything is synchronous `&mut self`, so no
//! locking discipline is needed and none is provided.

use crate::catalog::{CustomerDirectory, DashboardSnapshot, OrderBook, ProductCatalog};
use crate::stylist;
use crate::theme::{ColorPreset, ThemeConfig, ThemeHistory, ThemePatch};
use tracing::info;

/// Snapshot handed to the presentation layer after every theme operation
///
/// Carries the value the live preview redraws from and the two booleans the
/// undo/redo buttons enable on.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeView {
    /// The active theme
    pub config: ThemeConfig,
    /// Whether the undo button should be enabled
    pub can_undo: bool,
    /// Whether the redo button should be enabled
    pub can_redo: bool,
}

/// One admin studio session
#[derive(Debug)]
pub struct StudioSession {
    theme: ThemeHistory,
    /// Product catalog (public: the inventory screen drives it directly)
    pub products: ProductCatalog,
    /// Customer directory (public: the customer screen drives it directly)
    pub customers: CustomerDirectory,
    /// Order history (public: the order screen drives it directly)
    pub orders: OrderBook,
}

impl StudioSession {
    /// Start a session with the default theme and empty catalogs
    pub fn new() -> Self {
        Self {
            theme: ThemeHistory::default(),
            products: ProductCatalog::new(),
            customers: CustomerDirectory::new(),
            orders: OrderBook::new(),
        }
    }

    /// Start a session with the demo fixtures loaded
    pub fn seeded() -> Self {
        info!("Starting studio session with demo fixtures");
        Self {
            theme: ThemeHistory::default(),
            products: ProductCatalog::seeded(),
            customers: CustomerDirectory::seeded(),
            orders: OrderBook::seeded(),
        }
    }

    /// Current theme plus undo/redo availability
    pub fn theme_view(&self) -> ThemeView {
        ThemeView {
            config: self.theme.current().clone(),
            can_undo: self.theme.can_undo(),
            can_redo: self.theme.can_redo(),
        }
    }

    /// Apply a single-control edit as one history entry
    ///
    /// Merges the patch onto the current theme before handing the complete
    /// snapshot to the history. Empty patches are ignored so a control that
    /// reports no change does not burn an undo step.
    pub fn edit_theme(&mut self, patch: &ThemePatch) -> ThemeView {
        if !patch.is_empty() {
            let merged = self.theme.current().merged(patch);
            self.theme.apply(merged);
        }
        self.theme_view()
    }

    /// Apply a quick color preset as one history entry
    pub fn apply_preset(&mut self, preset: &ColorPreset) -> ThemeView {
        info!(preset = preset.name, "Applying color preset");
        let themed = self.theme.current().with_preset(preset);
        self.theme.apply(themed);
        self.theme_view()
    }

    /// Apply the stylist's proposal for a prompt as one history entry
    ///
    /// The whole restyle lands as a single entry, so one undo reverts it
    /// completely.
    pub fn apply_stylist_suggestion(&mut self, prompt: &str) -> ThemeView {
        info!(prompt, "Applying stylist suggestion");
        let suggestion = stylist::suggest_theme(self.theme.current(), prompt);
        self.theme.apply(suggestion);
        self.theme_view()
    }

    /// Step the theme back one edit; silently does nothing at the floor
    pub fn undo_theme(&mut self) -> ThemeView {
        self.theme.undo();
        self.theme_view()
    }

    /// Step the theme forward one undone edit; silently does nothing at the top
    pub fn redo_theme(&mut self) -> ThemeView {
        self.theme.redo();
        self.theme_view()
    }

    /// Dashboard rollup over the session's catalogs
    pub fn dashboard(&self) -> DashboardSnapshot {
        DashboardSnapshot::collect(&self.products, &self.customers, &self.orders)
    }
}

impl Default for StudioSession {
    fn default() -> Self {
        Self::new()
    }
}
