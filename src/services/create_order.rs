//! # Order creation
//!
//! Customer lookup, product fetch, stock validation, order persistence and
//! the stock write-back. The validation step is [`assemble_order`], a pure
//! function; everything else goes through the repository traits.
//!
//! Stock is read and written in two separate round trips to the catalog, so
//! another order can slip in between. Each stock update carries the product
//! version it was computed from; when the catalog reports a conflict the
//! freshly stored order is removed and the attempt starts again from the
//! product fetch.

use crate::config::DEFAULT_STOCK_CONFLICT_RETRIES;
use crate::model::{
    CreateOrderRequest, Order, OrderCreate, OrderLine, OrderLineRequest, Product, ProductId,
    ProductQuantityUpdate,
};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::repositories::{CustomersRepository, OrdersRepository, ProductsRepository};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Lines and stock levels computed from one consistent read of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledOrder {
    /// One line per requested line, in request order.
    pub lines: Vec<OrderLine>,
    /// New absolute stock per distinct product, in first-seen order.
    pub stock_updates: Vec<ProductQuantityUpdate>,
    /// Sum of the line subtotals.
    pub total: Decimal,
}

/// Checks every requested line against `products` and prices it.
///
/// A product requested on several lines is validated cumulatively: each line
/// draws from what the earlier ones left. A line whose subtotal, or the
/// running total, leaves the `Decimal` range fails with
/// [`OrderError::TotalOverflow`].
pub fn assemble_order(
    products: &[Product],
    requested: &[OrderLineRequest],
) -> Result<AssembledOrder, OrderError> {
    if requested.is_empty() {
        return Err(OrderError::EmptyOrder);
    }

    let catalog: HashMap<&ProductId, &Product> =
        products.iter().map(|product| (&product.id, product)).collect();
    let mut remaining: Vec<(&Product, u32)> = Vec::new();
    let mut lines = Vec::with_capacity(requested.len());
    let mut total = Decimal::ZERO;

    for line in requested {
        let product = catalog
            .get(&line.product_id)
            .copied()
            .ok_or_else(|| OrderError::InvalidProduct(line.product_id.clone()))?;

        if line.quantity == 0 {
            return Err(OrderError::InvalidQuantity {
                product_id: line.product_id.clone(),
                quantity: line.quantity,
            });
        }

        let slot = match remaining.iter().position(|(seen, _)| seen.id == product.id) {
            Some(slot) => slot,
            None => {
                remaining.push((product, product.quantity));
                remaining.len() - 1
            }
        };
        remaining[slot].1 = remaining[slot]
            .1
            .checked_sub(line.quantity)
            .ok_or_else(|| OrderError::SoldOut(product.id.clone()))?;

        let order_line = OrderLine {
            product_id: product.id.clone(),
            unit_price: product.price,
            quantity: line.quantity,
        };
        total = order_line
            .subtotal()
            .and_then(|subtotal| total.checked_add(subtotal))
            .ok_or_else(|| OrderError::TotalOverflow(product.id.clone()))?;
        lines.push(order_line);
    }

    let stock_updates = remaining
        .into_iter()
        .map(|(product, quantity)| ProductQuantityUpdate {
            id: product.id.clone(),
            quantity,
            version: product.version,
        })
        .collect();

    Ok(AssembledOrder {
        lines,
        stock_updates,
        total,
    })
}

/// Places orders against a customer store, a product catalog and an order
/// store.
#[derive(Clone)]
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
    stock_conflict_retries: u32,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomersRepository,
    P: ProductsRepository,
    O: OrdersRepository,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
            stock_conflict_retries: DEFAULT_STOCK_CONFLICT_RETRIES,
        }
    }

    /// How many extra attempts a stock conflict may trigger.
    pub fn with_stock_conflict_retries(mut self, retries: u32) -> Self {
        self.stock_conflict_retries = retries;
        self
    }

    /// Creates the order and takes its quantities out of stock.
    ///
    /// Business rule failures ([`OrderError::CustomerNotFound`],
    /// [`OrderError::InvalidProduct`], [`OrderError::SoldOut`] and friends)
    /// leave every store untouched. A storage failure after the order was
    /// stored is returned as is.
    #[instrument(skip(self, request), fields(customer_id = %request.customer_id, lines = request.products.len()))]
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        if self
            .customers
            .find_by_id(request.customer_id.clone())
            .await?
            .is_none()
        {
            warn!("Customer not found");
            return Err(OrderError::CustomerNotFound(request.customer_id));
        }

        let mut attempt = 0;
        loop {
            match self.place(&request).await {
                Err(OrderError::Product(ProductError::StockConflict { id, .. })) => {
                    if attempt >= self.stock_conflict_retries {
                        warn!(product_id = %id, attempt, "Giving up after stock conflicts");
                        return Err(OrderError::StockConflict(id));
                    }
                    attempt += 1;
                    warn!(product_id = %id, attempt, "Stock changed concurrently, retrying");
                }
                result => return result,
            }
        }
    }

    async fn place(&self, request: &CreateOrderRequest) -> Result<Order, OrderError> {
        let ids = request
            .products
            .iter()
            .map(|line| line.product_id.clone())
            .collect();
        let products = self.products.find_all_by_id(ids).await?;
        debug!(found = products.len(), "Products fetched");

        let assembled = assemble_order(&products, &request.products)?;
        let total = assembled.total;

        let order = self
            .orders
            .create(OrderCreate {
                customer_id: request.customer_id.clone(),
                lines: assembled.lines,
            })
            .await?;

        match self.products.update_quantity(assembled.stock_updates).await {
            Ok(_) => {
                info!(order_id = %order.id, %total, "Order created");
                Ok(order)
            }
            Err(conflict @ ProductError::StockConflict { .. }) => {
                self.orders.remove(order.id.clone()).await?;
                debug!(order_id = %order.id, "Order withdrawn after stock conflict");
                Err(conflict.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
