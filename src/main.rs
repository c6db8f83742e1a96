use actor_framework::tracing::setup_tracing;
use rust_decimal_macros::dec;
use storefront::config::ServiceConfig;
use storefront::lifecycle::OrderSystem;
use storefront::model::{CreateOrderRequest, CustomerCreate, OrderLineRequest, ProductCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServiceConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting storefront");

    let system = OrderSystem::with_config(config);

    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(customer_id = %customer_id, "Customer created");

    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Mechanical Keyboard".to_string(),
            price: dec!(89.90),
            quantity: 10,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = %product_id, "Product created");

    let request = CreateOrderRequest {
        customer_id,
        products: vec![OrderLineRequest {
            product_id: product_id.clone(),
            quantity: 3,
        }],
    };

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Placing order");
        system.create_order.execute(request).await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(order_id = %order.id, total = ?order.total(), "Order placed"),
        Err(e) => error!(error = %e, "Order failed"),
    }

    let stock = system
        .product_client
        .check_stock(product_id)
        .await
        .map_err(|e| e.to_string())?;
    info!(stock, "Remaining stock");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
