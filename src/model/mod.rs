//! Plain data carried between the actors, the clients and the order service.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
