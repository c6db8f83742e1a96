use crate::model::{Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use crate::repositories::OrdersRepository;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Orchestration (customer lookup, stock) happens in
/// [`CreateOrderService`](crate::services::CreateOrderService), not here.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Fetches a stored order. Orders never change once stored.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrdersRepository for OrderClient {
    #[instrument(skip(self, order), fields(customer_id = %order.customer_id, lines = order.lines.len()))]
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(order).await.map_err(Self::map_error)?;
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}
