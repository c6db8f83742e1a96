//! # Order Actor
//!
//! Stores placed orders. Orchestration (customer lookup, stock checks) lives
//! in [`CreateOrderService`](crate::services::CreateOrderService); this actor
//! only persists what it is given.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
