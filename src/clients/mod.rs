//! Typed wrappers around [`ResourceClient`](actor_framework::ResourceClient),
//! one per actor. They turn framework errors back into the entity's own error
//! enum and implement the [`repositories`](crate::repositories) traits.

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
