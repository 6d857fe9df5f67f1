//! In-memory store catalogs
//!
//! CRUD list managers for products, customers and orders, plus the
//! dashboard rollup derived from all three. Each manager owns a plain
//! `Vec` of records with unique ids and lives only for the session.

pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;

pub use customers::{Customer, CustomerDirectory, CustomerDraft, CustomerStatus};
pub use dashboard::DashboardSnapshot;
pub use orders::{Order, OrderBook, OrderStatus, OrderStatusCounts};
pub use products::{Product, ProductCatalog, ProductDraft, ProductStatus};
