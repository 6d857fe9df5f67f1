//! In-memory order book
//!
//! Read-mostly view over placed orders: search, per-status counts, and
//! removal from the history. Orders are keyed by their human-facing
//! `ORD-NNNN` reference rather than an opaque id.

use crate::error::{Result, StoreforgeError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Fulfillment status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Human-facing reference, e.g. `ORD-7721`
    pub reference: String,
    /// Name of the customer who placed it
    pub customer_name: String,
    /// Date the order was placed
    pub placed_on: NaiveDate,
    /// Order total
    pub total: f64,
    /// Fulfillment status
    pub status: OrderStatus,
    /// Number of line items
    pub items_count: u32,
}

/// Per-status order counts for the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusCounts {
    pub pending: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

/// The store's order history
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Create an empty order book
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order book pre-loaded with the demo fixtures
    pub fn seeded() -> Self {
        let fixtures = [
            ("ORD-7721", "Lucas Aramburu", (2026, 2, 9), 25900.0, OrderStatus::Pending, 3),
            ("ORD-8842", "Sofía Rodríguez", (2026, 2, 8), 12500.0, OrderStatus::Shipped, 1),
            ("ORD-9910", "Martín Fierro", (2026, 2, 7), 45000.0, OrderStatus::Delivered, 5),
            ("ORD-1120", "Elena White", (2026, 2, 5), 8900.0, OrderStatus::Cancelled, 2),
        ];
        let orders = fixtures
            .into_iter()
            .map(|(reference, customer, (y, m, d), total, status, items)| Order {
                reference: reference.to_string(),
                customer_name: customer.to_string(),
                placed_on: NaiveDate::from_ymd_opt(y, m, d)
                    .expect("seed order fixtures use valid dates"),
                total,
                status,
                items_count: items,
            })
            .collect();
        Self { orders }
    }

    /// All orders, newest first as seeded
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by reference
    pub fn get(&self, reference: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.reference == reference)
    }

    /// Record a newly placed order
    pub fn place(&mut self, order: Order) {
        info!(reference = %order.reference, total = order.total, "Order placed");
        self.orders.insert(0, order);
    }

    /// Move an order to a new fulfillment status
    pub fn set_status(&mut self, reference: &str, status: OrderStatus) -> Result<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.reference == reference)
            .ok_or_else(|| StoreforgeError::OrderNotFound(reference.to_string()))?;
        info!(%reference, ?status, "Order status changed");
        order.status = status;
        Ok(())
    }

    /// Remove an order from the history
    pub fn remove(&mut self, reference: &str) -> Result<()> {
        let position = self
            .orders
            .iter()
            .position(|o| o.reference == reference)
            .ok_or_else(|| StoreforgeError::OrderNotFound(reference.to_string()))?;
        self.orders.remove(position);
        info!(%reference, "Order removed from history");
        Ok(())
    }

    /// Case-insensitive filter over reference and customer name
    pub fn search(&self, term: &str) -> Vec<&Order> {
        let term = term.to_lowercase();
        self.orders
            .iter()
            .filter(|o| {
                o.reference.to_lowercase().contains(&term)
                    || o.customer_name.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Per-status counts for the dashboard cards
    pub fn status_counts(&self) -> OrderStatusCounts {
        let mut counts = OrderStatusCounts::default();
        for order in &self.orders {
            match order.status {
                OrderStatus::Pending => counts.pending += 1,
                OrderStatus::Shipped => counts.shipped += 1,
                OrderStatus::Delivered => counts.delivered += 1,
                OrderStatus::Cancelled => counts.cancelled += 1,
            }
        }
        counts
    }

    /// Revenue across non-cancelled orders
    pub fn revenue(&self) -> f64 {
        self.orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_fixtures() {
        let book = OrderBook::seeded();
        assert_eq!(book.all().len(), 4);
        let order = book.get("ORD-7721").unwrap();
        assert_eq!(order.customer_name, "Lucas Aramburu");
        assert_eq!(order.placed_on, NaiveDate::from_ymd_opt(2026, 2, 9).unwrap());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_place_prepends_newest() {
        let mut book = OrderBook::seeded();
        book.place(Order {
            reference: "ORD-0001".to_string(),
            customer_name: "Ana Pérez".to_string(),
            placed_on: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
            total: 3990.0,
            status: OrderStatus::Pending,
            items_count: 1,
        });
        assert_eq!(book.all()[0].reference, "ORD-0001");
    }

    #[test]
    fn test_set_status_transitions() {
        let mut book = OrderBook::seeded();
        book.set_status("ORD-7721", OrderStatus::Shipped).unwrap();
        assert_eq!(book.get("ORD-7721").unwrap().status, OrderStatus::Shipped);
        assert!(book.set_status("ORD-0000", OrderStatus::Shipped).is_err());
    }

    #[test]
    fn test_remove_by_reference() {
        let mut book = OrderBook::seeded();
        book.remove("ORD-1120").unwrap();
        assert_eq!(book.all().len(), 3);
        let err = book.remove("ORD-1120").unwrap_err();
        assert!(matches!(err, StoreforgeError::OrderNotFound(_)));
    }

    #[test]
    fn test_search_matches_reference_or_customer() {
        let book = OrderBook::seeded();
        assert_eq!(book.search("ord-99").len(), 1);
        assert_eq!(book.search("sofía").len(), 1);
        assert_eq!(book.search("ORD").len(), 4);
    }

    #[test]
    fn test_status_counts_and_revenue() {
        let book = OrderBook::seeded();
        let counts = book.status_counts();
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.shipped, 1);
        assert_eq!(counts.delivered, 1);
        assert_eq!(counts.cancelled, 1);
        // Cancelled ORD-1120 is excluded from revenue
        assert_eq!(book.revenue(), 25900.0 + 12500.0 + 45000.0);
    }
}
