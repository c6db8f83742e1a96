//! # Customer Actor
//!
//! Stores customers. It has no dependencies (`Context = ()`) and no custom
//! actions; order creation only asks it whether a customer exists.
//!
//! - [`entity`]: [`ActorEntity`](actor_framework::ActorEntity) for [`Customer`]
//! - [`error`]: [`CustomerError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use actor_framework::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
