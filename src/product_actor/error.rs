//! Error types for the Product actor.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Another product already uses this name.
    #[error("There is already one product with this name: {0}")]
    NameTaken(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    #[error("Product validation error: {0}")]
    ValidationError(String),

    /// The product changed since the caller read it.
    #[error("Stock of {id} changed concurrently: expected version {expected}, found {actual}")]
    StockConflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
