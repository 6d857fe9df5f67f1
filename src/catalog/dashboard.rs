//! Dashboard aggregation
//!
//! Pure cross-catalog rollup backing the admin dashboard's stat cards.

use crate::catalog::customers::{CustomerDirectory, CustomerStats};
use crate::catalog::orders::{OrderBook, OrderStatusCounts};
use crate::catalog::products::{ProductCatalog, ProductStats};
use serde::{Deserialize, Serialize};

/// One snapshot of everything the dashboard page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Revenue across non-cancelled orders
    pub revenue: f64,
    /// Number of orders on record
    pub total_orders: usize,
    /// Inventory rollup
    pub products: ProductStats,
    /// Customer base rollup
    pub customers: CustomerStats,
    /// Order fulfillment breakdown
    pub order_status: OrderStatusCounts,
}

impl DashboardSnapshot {
    /// Derive a snapshot from the three catalogs
    pub fn collect(
        products: &ProductCatalog,
        customers: &CustomerDirectory,
        orders: &OrderBook,
    ) -> Self {
        Self {
            revenue: orders.revenue(),
            total_orders: orders.all().len(),
            products: products.stats(),
            customers: customers.stats(),
            order_status: orders.status_counts(),
        }
    }
}
