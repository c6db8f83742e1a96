//! # System Lifecycle
//!
//! Spawns the customer, product and order actors, wires the order service on
//! top of their clients and shuts everything down again.
//!
//! None of the actors needs another actor in its context: the only logic that
//! spans stores lives in [`CreateOrderService`](crate::services::CreateOrderService),
//! which holds client clones. Shutdown therefore has to drop the service
//! together with the clients, otherwise the channels stay open.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod order_system;

pub use order_system::*;
