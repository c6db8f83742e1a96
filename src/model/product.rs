use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A catalog entry with its current price and stock.
///
/// `version` starts at 0 and moves on every accepted change, so a writer can
/// tell whether the stock it read is still current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub version: u64,
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Payload for changing a product.
///
/// With `expected_version` set the update is rejected unless the product is
/// still at that version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
    pub expected_version: Option<u64>,
}

/// New absolute stock level for one product, valid only against `version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuantityUpdate {
    pub id: ProductId,
    pub quantity: u32,
    pub version: u64,
}

impl From<ProductQuantityUpdate> for (ProductId, ProductUpdate) {
    fn from(update: ProductQuantityUpdate) -> Self {
        (
            update.id,
            ProductUpdate {
                price: None,
                quantity: Some(update.quantity),
                expected_version: Some(update.version),
            },
        )
    }
}
