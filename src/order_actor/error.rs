//! Error types for order creation and the Order actor.

use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, OrderId, ProductId};
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur while creating or reading orders.
///
/// The first three are the business rule failures of order creation; they are
/// raised before anything is persisted.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Customer not found")]
    CustomerNotFound(CustomerId),

    #[error("You tried to create an order with an invalid product. [ID: {0}]")]
    InvalidProduct(ProductId),

    #[error("The product with ID {0} is sold out.")]
    SoldOut(ProductId),

    #[error("Invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: ProductId, quantity: u32 },

    #[error("An order needs at least one product")]
    EmptyOrder,

    /// The order total no longer fits in a `Decimal`.
    #[error("The order total overflows at product {0}")]
    TotalOverflow(ProductId),

    /// Stock kept changing under the order; retries were exhausted.
    #[error("Stock of product {0} changed while the order was placed")]
    StockConflict(String),

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
