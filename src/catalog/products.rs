//! In-memory product catalog
//!
//! CRUD over the store's product list with id uniqueness, case-insensitive
//! search over name and category, and the inventory stats the dashboard
//! cards show.

use crate::error::{Result, StoreforgeError};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Stock level below which a product counts as low stock
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Listing status of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
}

/// A product in the store catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for this catalog entry
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Longer description shown in the listing
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub stock: u32,
    /// Free-text category
    pub category: String,
    /// Listing status
    pub status: ProductStatus,
}

/// Fields the product form collects; id and status are assigned on create
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
}

impl ProductDraft {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StoreforgeError::Validation("product name is required".to_string()));
        }
        if self.price <= 0.0 {
            return Err(StoreforgeError::Validation(
                "product price must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Inventory stats shown above the product table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStats {
    /// Number of products in the catalog
    pub total_products: usize,
    /// Total inventory value (sum of price times stock)
    pub inventory_value: f64,
    /// Total units across all products
    pub global_stock: u32,
    /// Products below the low-stock threshold
    pub low_stock_count: usize,
}

/// The store's product list
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-loaded with the demo fixtures
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (name, description, price, stock, category) in [
            (
                "Zapatillas Running Pro",
                "Zapatillas profesionales de alto impacto",
                12990.0,
                45,
                "Deportes",
            ),
            (
                "Auriculares Bluetooth",
                "Cancelación de ruido activa y 40h de batería",
                9990.0,
                28,
                "Electrónica",
            ),
            (
                "Remera Técnica",
                "Tela respirable para entrenamiento intenso",
                3990.0,
                5,
                "Deportes",
            ),
        ] {
            let draft = ProductDraft {
                name: name.to_string(),
                description: description.to_string(),
                price,
                stock,
                category: category.to_string(),
            };
            // Fixtures are well-formed by construction
            catalog.add(draft).expect("seed product fixtures are valid");
        }
        catalog
    }

    /// All products, in insertion order
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id
    pub fn get(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Add a new product from a validated draft; returns its generated id
    pub fn add(&mut self, draft: ProductDraft) -> Result<Uuid> {
        draft.validate()?;
        let id = Uuid::new_v4();
        info!(%id, name = %draft.name, "Product created");
        self.products.push(Product {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            category: draft.category,
            status: ProductStatus::Active,
        });
        Ok(id)
    }

    /// Replace an existing product's form fields, keeping its id and status
    pub fn update(&mut self, id: Uuid, draft: ProductDraft) -> Result<()> {
        draft.validate()?;
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreforgeError::ProductNotFound(id))?;
        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        product.stock = draft.stock;
        product.category = draft.category;
        info!(%id, "Product updated");
        Ok(())
    }

    /// Remove a product by id
    pub fn remove(&mut self, id: Uuid) -> Result<()> {
        let position = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreforgeError::ProductNotFound(id))?;
        self.products.remove(position);
        info!(%id, "Product removed");
        Ok(())
    }

    /// Case-insensitive filter over product name and category
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term) || p.category.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Inventory stats for the dashboard cards
    pub fn stats(&self) -> ProductStats {
        ProductStats {
            total_products: self.products.len(),
            inventory_value: self
                .products
                .iter()
                .map(|p| p.price * f64::from(p.stock))
                .sum(),
            global_stock: self.products.iter().map(|p| p.stock).sum(),
            low_stock_count: self
                .products
                .iter()
                .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
                .count(),
        }
    }
}
