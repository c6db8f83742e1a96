//! Storage seams used by [`CreateOrderService`](crate::services::CreateOrderService).
//!
//! The typed clients implement these against the actors. Tests can hand the
//! service clients built on [`MockClient`](actor_framework::mock::MockClient)s
//! instead.

use crate::customer_actor::CustomerError;
use crate::model::{
    Customer, CustomerId, Order, OrderCreate, OrderId, Product, ProductId, ProductQuantityUpdate,
};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

#[async_trait]
pub trait CustomersRepository: Send + Sync {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError>;
}

#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Products for the ids that exist. Unknown ids are silently absent and
    /// repeated ids come back once.
    async fn find_all_by_id(&self, ids: Vec<ProductId>) -> Result<Vec<Product>, ProductError>;

    /// Sets every product to its new stock level, all or nothing.
    ///
    /// Fails with [`ProductError::StockConflict`] if any product moved past
    /// the version its update was computed from.
    async fn update_quantity(
        &self,
        updates: Vec<ProductQuantityUpdate>,
    ) -> Result<Vec<Product>, ProductError>;
}

#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persists the order and returns it with its generated id.
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError>;

    async fn remove(&self, id: OrderId) -> Result<(), OrderError>;
}
