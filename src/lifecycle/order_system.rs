use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::config::ServiceConfig;
use crate::services::CreateOrderService;
use tracing::{error, info};

/// The order service as wired by [`OrderSystem`].
pub type OrderService = CreateOrderService<CustomerClient, ProductClient, OrderClient>;

/// Owns the running actors and hands out their clients.
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let customer_id = system.customer_client.create_customer(customer).await?;
/// let product_id = system.product_client.create_product(product).await?;
/// let order = system.create_order.execute(request).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Customer actor
    pub customer_client: CustomerClient,

    /// Client for interacting with the Product actor (catalog and stock)
    pub product_client: ProductClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Order creation, wired to clones of the three clients above
    pub create_order: OrderService,

    /// Task handles for all running actors (awaited on shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts the system with default settings. Needs a tokio runtime.
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    /// Starts the system with explicit settings.
    ///
    /// This method:
    /// 1. Creates the Customer, Product and Order actors with
    ///    `config.channel_buffer` as their channel capacity
    /// 2. Spawns each actor in its own tokio task (`Context = ()` for all three)
    /// 3. Builds the [`CreateOrderService`] on clones of their clients
    ///
    /// # Returns
    ///
    /// A running `OrderSystem`, ready to accept requests.
    pub fn with_config(config: ServiceConfig) -> Self {
        let (customer_actor, customer_client) = crate::customer_actor::new(config.channel_buffer);
        let (product_actor, product_client) = crate::product_actor::new(config.channel_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.channel_buffer);

        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];

        let create_order = CreateOrderService::new(
            customer_client.clone(),
            product_client.clone(),
            order_client.clone(),
        )
        .with_stock_conflict_retries(config.stock_conflict_retries);

        info!(?config, "Order system started");
        Self {
            customer_client,
            product_client,
            order_client,
            create_order,
            handles,
        }
    }

    /// Drops every client, then waits for the actors to drain and stop.
    ///
    /// Clones handed out earlier keep their actor alive, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.create_order);
        drop(self.order_client);
        drop(self.customer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
