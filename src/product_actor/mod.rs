//! # Product Actor
//!
//! The catalog: prices, stock levels and the version counter that makes
//! concurrent stock changes safe. Order creation reads products in one
//! `get_many` round trip and writes all stock changes back in one atomic
//! `update_many`.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
