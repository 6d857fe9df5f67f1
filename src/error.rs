//! Error types for the storeforge studio core
//!
//! This module defines all error types used throughout the crate,
//! providing clear error messages and proper error propagation.
//!
//! Note that theme history operations (`undo`/`redo` on empty stacks) are
//! defined no-ops, not errors; nothing in `theme::history` produces a
//! variant from this enum. Catalog mutations and brief validation do.

use thiserror::Error;
use uuid::Uuid;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for storeforge operations
#[derive(Debug, Error)]
pub enum StoreforgeError {
    /// A required field was missing or empty on a create/update request
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No product with the given id exists in the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    /// No customer with the given id exists in the directory
    #[error("Customer not found: {0}")]
    CustomerNotFound(Uuid),

    /// No order with the given reference exists in the order book
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Logging or data-directory setup error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for storeforge operations
pub type Result<T> = std::result::Result<T, StoreforgeError>;

/// Convert an error to a user-friendly message
///
/// Takes a `StoreforgeError` and returns a message suitable for displaying
/// to end users in the admin UI's dialogs and toasts.
pub fn get_user_friendly_error(error: &StoreforgeError) -> String {
    match error {
        StoreforgeError::Validation(msg) => {
            format!(
                "Some required fields are missing or invalid:\n\n{msg}\n\n\
                 Please complete the form and try again."
            )
        }
        StoreforgeError::ProductNotFound(_) => "This product no longer exists.\n\n\
             It may have been deleted in another view.\n\
             Refresh the inventory list to continue."
            .to_string(),
        StoreforgeError::CustomerNotFound(_) => "This customer no longer exists.\n\n\
             The record may have been removed.\n\
             Refresh the customer list to continue."
            .to_string(),
        StoreforgeError::OrderNotFound(reference) => {
            format!(
                "Order {reference} was not found.\n\n\
                 It may have been removed from the history.\n\
                 Refresh the order list to continue."
            )
        }
        StoreforgeError::ConfigError(_) => "Failed to set up the studio session.\n\n\
             Logs may not be written for this session.\n\
             Check that you have write permissions to the data directory."
            .to_string(),
        StoreforgeError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        StoreforgeError::JsonError(e) => {
            format!(
                "Import or export data is corrupted:\n\n{e}\n\n\
                 The operation was aborted; no changes were made."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = StoreforgeError::Validation("name is required".to_string());
        assert_eq!(error.to_string(), "Validation failed: name is required");
    }

    #[test]
    fn test_order_not_found_display() {
        let error = StoreforgeError::OrderNotFound("ORD-7721".to_string());
        assert_eq!(error.to_string(), "Order not found: ORD-7721");
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = StoreforgeError::Validation("price is required".to_string());
        let message = get_user_friendly_error(&error);
        assert!(message.contains("price is required"));
        assert!(message.contains("complete the form"));
    }

    #[test]
    fn test_order_not_found_user_friendly() {
        let error = StoreforgeError::OrderNotFound("ORD-1120".to_string());
        let message = get_user_friendly_error(&error);
        assert!(message.contains("ORD-1120"));
        assert!(message.contains("Refresh the order list"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: StoreforgeError = io_error.into();
        assert!(matches!(error, StoreforgeError::IoError(_)));
    }

    #[test]
    fn test_config_error_preserves_source() {
        use std::error::Error;
        let error = StoreforgeError::ConfigError(StringError::new("bad data dir"));
        assert!(error.source().is_some());
        assert_eq!(error.to_string(), "Configuration error: bad data dir");
    }
}
