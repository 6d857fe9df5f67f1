//! In-memory customer directory
//!
//! CRUD over the store's customer base. New customers start with zero
//! spend and zero orders; totals only move through `record_purchase`.

use crate::error::{Result, StoreforgeError};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Account status of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// A registered store customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for this record
    pub id: Uuid,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Lifetime spend
    pub total_spent: f64,
    /// Number of orders placed
    pub orders_count: u32,
    /// Account status
    pub status: CustomerStatus,
}

/// Fields the customer form collects
#[derive(Debug, Clone, Default)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CustomerDraft {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StoreforgeError::Validation("customer name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(StoreforgeError::Validation(
                "customer email is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Directory stats shown above the customer table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerStats {
    /// Number of customers on record
    pub total_customers: usize,
    /// Lifetime value across all customers
    pub lifetime_value: f64,
    /// Total orders across all customers
    pub total_orders: u32,
    /// Customers with an active account
    pub active_count: usize,
}

/// The store's customer list
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-loaded with the demo fixtures
    pub fn seeded() -> Self {
        let mut directory = Self::new();
        let fixtures = [
            ("Lucas Aramburu", "lucas@ejemplo.com", "+54 11 4444 5555", 45000.0, 12, CustomerStatus::Active),
            ("Sofía Rodríguez", "sofia@design.com", "+54 11 2222 3333", 12000.0, 3, CustomerStatus::Active),
            ("Martín Fierro", "martin@gaucho.com", "+54 11 6666 7777", 0.0, 0, CustomerStatus::Inactive),
        ];
        for (name, email, phone, total_spent, orders_count, status) in fixtures {
            directory.customers.push(Customer {
                id: Uuid::new_v4(),
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                total_spent,
                orders_count,
                status,
            });
        }
        directory
    }

    /// All customers, in insertion order
    pub fn all(&self) -> &[Customer] {
        &self.customers
    }

    /// Look up a customer by id
    pub fn get(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Register a new customer; starts active with zero spend and orders
    pub fn add(&mut self, draft: CustomerDraft) -> Result<Uuid> {
        draft.validate()?;
        let id = Uuid::new_v4();
        info!(%id, name = %draft.name, "Customer registered");
        self.customers.push(Customer {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            total_spent: 0.0,
            orders_count: 0,
            status: CustomerStatus::Active,
        });
        Ok(id)
    }

    /// Update a customer's contact fields, keeping totals and status
    pub fn update(&mut self, id: Uuid, draft: CustomerDraft) -> Result<()> {
        draft.validate()?;
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreforgeError::CustomerNotFound(id))?;
        customer.name = draft.name;
        customer.email = draft.email;
        customer.phone = draft.phone;
        info!(%id, "Customer updated");
        Ok(())
    }

    /// Remove a customer by id
    pub fn remove(&mut self, id: Uuid) -> Result<()> {
        let position = self
            .customers
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreforgeError::CustomerNotFound(id))?;
        self.customers.remove(position);
        info!(%id, "Customer removed");
        Ok(())
    }

    /// Credit a completed purchase to a customer's lifetime totals
    pub fn record_purchase(&mut self, id: Uuid, amount: f64) -> Result<()> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreforgeError::CustomerNotFound(id))?;
        customer.total_spent += amount;
        customer.orders_count += 1;
        Ok(())
    }

    /// Case-insensitive filter over customer name and email
    pub fn search(&self, term: &str) -> Vec<&Customer> {
        let term = term.to_lowercase();
        self.customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&term) || c.email.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Directory stats for the dashboard cards
    pub fn stats(&self) -> CustomerStats {
        CustomerStats {
            total_customers: self.customers.len(),
            lifetime_value: self.customers.iter().map(|c| c.total_spent).sum(),
            total_orders: self.customers.iter().map(|c| c.orders_count).sum(),
            active_count: self
                .customers
                .iter()
                .filter(|c| c.status == CustomerStatus::Active)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> CustomerDraft {
        CustomerDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_new_customers_start_at_zero() {
        let mut directory = CustomerDirectory::new();
        let id = directory.add(draft("Ana Pérez", "ana@tienda.com")).unwrap();
        let customer = directory.get(id).unwrap();
        assert_eq!(customer.total_spent, 0.0);
        assert_eq!(customer.orders_count, 0);
        assert_eq!(customer.status, CustomerStatus::Active);
    }

    #[test]
    fn test_name_and_email_required() {
        let mut directory = CustomerDirectory::new();
        assert!(directory.add(draft("", "ana@tienda.com")).is_err());
        assert!(directory.add(draft("Ana", " ")).is_err());
    }

    #[test]
    fn test_update_preserves_totals() {
        let mut directory = CustomerDirectory::seeded();
        let id = directory.all()[0].id;
        directory.update(id, draft("Lucas A.", "lucas@nuevo.com")).unwrap();
        let customer = directory.get(id).unwrap();
        assert_eq!(customer.email, "lucas@nuevo.com");
        assert_eq!(customer.total_spent, 45000.0);
        assert_eq!(customer.orders_count, 12);
    }

    #[test]
    fn test_remove_missing_customer_fails() {
        let mut directory = CustomerDirectory::new();
        let err = directory.remove(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, StoreforgeError::CustomerNotFound(_)));
    }

    #[test]
    fn test_record_purchase_moves_totals() {
        let mut directory = CustomerDirectory::seeded();
        let id = directory.all()[2].id;
        directory.record_purchase(id, 8900.0).unwrap();
        let customer = directory.get(id).unwrap();
        assert_eq!(customer.total_spent, 8900.0);
        assert_eq!(customer.orders_count, 1);
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let directory = CustomerDirectory::seeded();
        assert_eq!(directory.search("sofía").len(), 1);
        assert_eq!(directory.search("GAUCHO").len(), 1);
        assert_eq!(directory.search("@").len(), 3);
    }

    #[test]
    fn test_stats_match_seed_fixtures() {
        let stats = CustomerDirectory::seeded().stats();
        assert_eq!(stats.total_customers, 3);
        assert_eq!(stats.lifetime_value, 57000.0);
        assert_eq!(stats.total_orders, 15);
        assert_eq!(stats.active_count, 2);
    }
}
