//! storeforge demo driver
//!
//! Walks a seeded studio session through the flows the admin screens wire
//! to - theme edits with undo/redo, a stylist restyle, catalog CRUD - and
//! prints the resulting dashboard rollup. Useful as a smoke run and as a
//! reference for embedding the session in a real presentation layer.

use anyhow::{Context, Result};
use storeforge::catalog::ProductDraft;
use storeforge::theme::{COLOR_PRESETS, ThemePatch};
use storeforge::{StudioSession, utils};
use tracing::info;

fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("storeforge demo session starting");
    let mut session = StudioSession::seeded();

    // Theme editing: preset, a control edit, then step back and forward
    let view = session.apply_preset(&COLOR_PRESETS[1]);
    println!(
        "Applied preset '{}': primary {}",
        COLOR_PRESETS[1].name, view.config.primary_color
    );

    let view = session.edit_theme(&ThemePatch::border_radius(20));
    println!(
        "Edited border radius to {}px (undo available: {})",
        view.config.border_radius, view.can_undo
    );

    let view = session.undo_theme();
    println!(
        "Undo -> radius {}px (redo available: {})",
        view.config.border_radius, view.can_redo
    );
    let view = session.redo_theme();
    println!("Redo -> radius {}px", view.config.border_radius);

    // A stylist restyle lands as a single undoable entry
    let view = session.apply_stylist_suggestion("elegante, oscuro, minimalista");
    println!(
        "Stylist suggestion: primary {} / font {}",
        view.config.primary_color,
        view.config.font_id.display_name()
    );

    // Catalog flow: add a product, then show what the dashboard sees
    let id = session
        .products
        .add(ProductDraft {
            name: "Mochila Urbana".to_string(),
            description: "Resistente al agua, 25L".to_string(),
            price: 18990.0,
            stock: 12,
            category: "Accesorios".to_string(),
        })
        .context("Failed to add demo product")?;
    info!(%id, "Demo product added");

    let dashboard = session.dashboard();
    println!(
        "Dashboard: {} products (inventory ${:.0}), {} customers, {} orders, revenue ${:.0}",
        dashboard.products.total_products,
        dashboard.products.inventory_value,
        dashboard.customers.total_customers,
        dashboard.total_orders,
        dashboard.revenue
    );

    info!("storeforge demo session finished");
    Ok(())
}
