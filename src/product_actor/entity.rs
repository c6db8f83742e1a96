//! [`ActorEntity`] implementation for [`Product`].
//!
//! Every accepted change bumps `version`. Updates carrying an
//! `expected_version` are compare-and-set: they fail with
//! [`ProductError::StockConflict`] when someone else got there first.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

fn validate_price(price: Decimal) -> Result<(), ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError("name must not be empty".into()));
        }
        validate_price(params.price)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            version: 0,
        })
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(expected) = update.expected_version {
            if expected != self.version {
                return Err(ProductError::StockConflict {
                    id: self.id.to_string(),
                    expected,
                    actual: self.version,
                });
            }
        }
        if let Some(price) = update.price {
            validate_price(price)?;
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        self.version += 1;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::Restock(units) => {
                self.quantity = self.quantity.checked_add(units).ok_or_else(|| {
                    ProductError::ValidationError(format!(
                        "restocking {units} units would overflow the stock of {}",
                        self.id
                    ))
                })?;
                self.version += 1;
                Ok(ProductActionResult::Restock(self.quantity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(quantity: u32) -> Product {
        Product::from_create_params(
            ProductId(1),
            ProductCreate {
                name: "Keyboard".into(),
                price: dec!(10.00),
                quantity,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let result = Product::from_create_params(
            ProductId(1),
            ProductCreate {
                name: "Keyboard".into(),
                price: dec!(-0.01),
                quantity: 1,
            },
        );
        assert_eq!(result.unwrap_err(), ProductError::InvalidPrice(dec!(-0.01)));
    }

    #[tokio::test]
    async fn test_versioned_update_detects_stale_reads() {
        let mut product = product(5);
        let update = ProductUpdate {
            quantity: Some(2),
            expected_version: Some(0),
            ..Default::default()
        };
        product.on_update(update.clone(), &()).await.unwrap();
        assert_eq!((product.quantity, product.version), (2, 1));

        let err = product.on_update(update, &()).await.unwrap_err();
        assert_eq!(
            err,
            ProductError::StockConflict {
                id: "product_1".into(),
                expected: 0,
                actual: 1,
            }
        );
        assert_eq!(product.quantity, 2);
    }

    #[tokio::test]
    async fn test_invalid_price_update_changes_nothing() {
        let mut product = product(5);
        let update = ProductUpdate {
            price: Some(dec!(-1)),
            quantity: Some(0),
            expected_version: None,
        };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!((product.quantity, product.version), (5, 0));
    }

    #[tokio::test]
    async fn test_restock_moves_version() {
        let mut product = product(5);
        let result = product.handle_action(ProductAction::Restock(3), &()).await.unwrap();
        assert_eq!(result, ProductActionResult::Restock(8));
        assert_eq!(product.version, 1);

        let overflow = product.handle_action(ProductAction::Restock(u32::MAX), &()).await;
        assert!(matches!(overflow, Err(ProductError::ValidationError(_))));
        assert_eq!(product.quantity, 8);
    }
}
