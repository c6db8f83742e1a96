//! # Actor Framework
//!
//! In-process resource stores built on the actor model. Each resource type
//! (customers, products, orders) lives in its own [`ResourceActor`]: a tokio task
//! that owns a `HashMap` store and serves requests one at a time over a channel.
//! Callers talk to it through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): domain type plus its create/update payloads,
//!    custom actions and error enum.
//! 2. **Runtime** ([`ResourceActor`]): the message loop, id generation and the
//!    store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async calls.
//!
//! ## Operations
//!
//! Single entity: create, get, update, delete and custom actions. Collections:
//! `get_many` (one round trip for a set of ids), `list`, and `update_many`,
//! which stages every update on a copy and commits only if all of them succeed.
//! Since the actor is the only owner of its store, nothing interleaves with a
//! batch.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shelf { id: u32, items: u32 }
//! #[derive(Debug)] struct ShelfCreate { items: u32 }
//! #[derive(Debug)] struct ShelfUpdate { items: u32 }
//! #[derive(Debug)] enum ShelfAction {}
//! #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32; type Create = ShelfCreate; type Update = ShelfUpdate;
//!     type Action = ShelfAction; type ActionResult = (); type Context = (); type Error = ShelfError;
//!
//!     fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, ShelfError> {
//!         Ok(Self { id, items: params.items })
//!     }
//!     async fn on_update(&mut self, update: ShelfUpdate, _: &()) -> Result<(), ShelfError> {
//!         self.items = update.items;
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, action: ShelfAction, _: &()) -> Result<(), ShelfError> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let a = client.create(ShelfCreate { items: 1 }).await.unwrap();
//!     let b = client.create(ShelfCreate { items: 2 }).await.unwrap();
//!     let updated = client
//!         .update_many(vec![(a, ShelfUpdate { items: 5 }), (b, ShelfUpdate { items: 6 })])
//!         .await
//!         .unwrap();
//!     assert_eq!(updated.len(), 2);
//!     assert_eq!(client.get(b).await.unwrap().unwrap().items, 6);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies reach an entity's hooks through `run(context)`, not `new()`,
//! so actors can be created first and wired afterwards.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from queued expectations, so code
//! built on clients can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
