//! # Storefront
//!
//! Order creation for an online store. A customer asks for a list of products
//! and quantities; the service checks the customer exists, validates every
//! line against current stock, snapshots prices into the order, stores it and
//! takes the quantities out of stock.
//!
//! Storage is a set of in-process actors built on [`actor_framework`]: one
//! tokio task per resource type, each owning its store and answering
//! requests one at a time.
//!
//! ## Module Tour
//!
//! - [`model`]: customers, products, orders and the order request.
//! - [`customer_actor`], [`product_actor`], [`order_actor`]: the
//!   [`ActorEntity`](actor_framework::ActorEntity) implementations and their
//!   error enums.
//! - [`clients`]: typed clients over the actors.
//! - [`repositories`]: the storage traits the order service depends on.
//! - [`services`]: [`CreateOrderService`](services::CreateOrderService) and
//!   the pure [`assemble_order`](services::assemble_order) step.
//! - [`config`]: settings read from the environment.
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem) starts and stops
//!   everything.
//!
//! ## Stock consistency
//!
//! Products carry a version that moves on every change. The order service
//! writes stock back as a compare-and-set batch against the versions it read,
//! so two orders racing for the same product cannot both succeed on stale
//! stock. The loser withdraws its order and tries again.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod repositories;
pub mod services;
