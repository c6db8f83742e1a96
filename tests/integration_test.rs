use actor_framework::ActorClient;
use rust_decimal_macros::dec;
use storefront::config::ServiceConfig;
use storefront::lifecycle::OrderSystem;
use storefront::model::{
    CreateOrderRequest, CustomerCreate, CustomerId, CustomerUpdate, OrderLine, OrderLineRequest,
    ProductCreate, ProductId, ProductUpdate,
};
use storefront::order_actor::OrderError;
use storefront::product_actor::ProductError;

async fn seed(system: &OrderSystem, stock: u32) -> (CustomerId, ProductId) {
    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .expect("Failed to create customer");
    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Product A".to_string(),
            price: dec!(10),
            quantity: stock,
        })
        .await
        .expect("Failed to create product");
    (customer_id, product_id)
}

fn request(customer_id: &CustomerId, lines: &[(&ProductId, u32)]) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_id: customer_id.clone(),
        products: lines
            .iter()
            .map(|(id, quantity)| OrderLineRequest {
                product_id: (*id).clone(),
                quantity: *quantity,
            })
            .collect(),
    }
}

/// Full end-to-end run with all real actors.
#[tokio::test]
async fn test_full_order_system_integration() {
    let system = OrderSystem::new();
    let (customer_id, a) = seed(&system, 5).await;

    let order = system
        .create_order
        .execute(request(&customer_id, &[(&a, 3)]))
        .await
        .expect("Failed to create order");

    assert_eq!(order.customer_id, customer_id);
    assert_eq!(
        order.lines,
        vec![OrderLine {
            product_id: a.clone(),
            unit_price: dec!(10),
            quantity: 3,
        }]
    );
    assert_eq!(order.total(), Some(dec!(30)));
    assert_eq!(system.product_client.check_stock(a.clone()).await.unwrap(), 2);

    let stored = system
        .order_client
        .find_by_id(order.id.clone())
        .await
        .unwrap()
        .expect("Order not stored");
    assert_eq!(stored, order);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_rejected_orders_change_nothing() {
    let system = OrderSystem::new();
    let (customer_id, a) = seed(&system, 5).await;
    let z = ProductId(26);

    let sold_out = system
        .create_order
        .execute(request(&customer_id, &[(&a, 6)]))
        .await;
    assert_eq!(sold_out, Err(OrderError::SoldOut(a.clone())));

    let invalid = system
        .create_order
        .execute(request(&customer_id, &[(&a, 1), (&z, 1)]))
        .await;
    assert_eq!(invalid, Err(OrderError::InvalidProduct(z)));
    assert_eq!(
        invalid.unwrap_err().to_string(),
        "You tried to create an order with an invalid product. [ID: product_26]"
    );

    let stranger = CustomerId(99);
    let no_customer = system
        .create_order
        .execute(request(&stranger, &[(&a, 1)]))
        .await;
    assert_eq!(no_customer, Err(OrderError::CustomerNotFound(stranger)));

    let empty = system.create_order.execute(request(&customer_id, &[])).await;
    assert_eq!(empty, Err(OrderError::EmptyOrder));

    assert_eq!(system.product_client.check_stock(a).await.unwrap(), 5);
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_repeated_product_draws_from_one_stock() {
    let system = OrderSystem::new();
    let (customer_id, a) = seed(&system, 5).await;

    let too_much = system
        .create_order
        .execute(request(&customer_id, &[(&a, 3), (&a, 3)]))
        .await;
    assert_eq!(too_much, Err(OrderError::SoldOut(a.clone())));

    let order = system
        .create_order
        .execute(request(&customer_id, &[(&a, 3), (&a, 2)]))
        .await
        .unwrap();
    assert_eq!(order.lines.len(), 2);
    assert_eq!(system.product_client.check_stock(a).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_keeps_price_at_purchase() {
    let system = OrderSystem::new();
    let (customer_id, a) = seed(&system, 5).await;

    let order = system
        .create_order
        .execute(request(&customer_id, &[(&a, 1)]))
        .await
        .unwrap();

    let repriced = system
        .product_client
        .update_product(
            a.clone(),
            ProductUpdate {
                price: Some(dec!(12.50)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(repriced.price, dec!(12.50));

    let stored = system
        .order_client
        .find_by_id(order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.lines[0].unit_price, dec!(10));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_never_oversell() {
    let config = ServiceConfig {
        channel_buffer: 64,
        stock_conflict_retries: 3,
    };
    let system = OrderSystem::with_config(config);
    let (customer_id, a) = seed(&system, 10).await;

    let mut handles = Vec::new();
    for _ in 0..25 {
        let service = system.create_order.clone();
        let request = request(&customer_id, &[(&a, 1)]);
        handles.push(tokio::spawn(async move { service.execute(request).await }));
    }

    let mut sold = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(order) => sold += order.lines[0].quantity,
            Err(OrderError::SoldOut(_)) | Err(OrderError::StockConflict(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert!(sold > 0);
    assert!(sold <= 10);
    let stock = system.product_client.check_stock(a).await.unwrap();
    assert_eq!(stock, 10 - sold);
    assert_eq!(system.order_client.list().await.unwrap().len() as u32, sold);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_and_customer_housekeeping() {
    let system = OrderSystem::new();
    let (_, a) = seed(&system, 2).await;

    let duplicate = system
        .product_client
        .create_product(ProductCreate {
            name: "Product A".to_string(),
            price: dec!(1),
            quantity: 1,
        })
        .await;
    assert_eq!(duplicate, Err(ProductError::NameTaken("Product A".to_string())));

    assert_eq!(system.product_client.restock(a.clone(), 3).await.unwrap(), 5);
    let found = system
        .product_client
        .find_by_name("Product A")
        .await
        .unwrap()
        .unwrap();
    assert_eq!((found.id, found.quantity, found.version), (a, 5, 1));

    let alice = system
        .customer_client
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .expect("Customer not found by email");

    let moved = system
        .customer_client
        .update_customer(
            alice.id.clone(),
            CustomerUpdate {
                email: Some("alice@shop.example".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.name, "Alice");
    assert!(system
        .customer_client
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        system
            .customer_client
            .find_by_email("alice@shop.example")
            .await
            .unwrap()
            .map(|customer| customer.id),
        Some(alice.id)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_total_out_of_range_is_rejected_before_storing() {
    let system = OrderSystem::new();
    let (customer_id, _) = seed(&system, 1).await;
    let bullion = system
        .product_client
        .create_product(ProductCreate {
            name: "Bullion".to_string(),
            price: dec!(100000000000000000000),
            quantity: 1_000_000_000,
        })
        .await
        .unwrap();

    let result = system
        .create_order
        .execute(request(&customer_id, &[(&bullion, 1_000_000_000)]))
        .await;

    assert_eq!(result, Err(OrderError::TotalOverflow(bullion.clone())));
    assert_eq!(
        system.product_client.check_stock(bullion).await.unwrap(),
        1_000_000_000
    );
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[test]
fn test_request_json_shape() {
    let request: CreateOrderRequest =
        serde_json::from_str(r#"{"customer_id":1,"products":[{"id":1,"quantity":3}]}"#).unwrap();

    assert_eq!(request.customer_id, CustomerId(1));
    assert_eq!(
        request.products,
        vec![OrderLineRequest {
            product_id: ProductId(1),
            quantity: 3,
        }]
    );
}
