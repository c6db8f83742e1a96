//! # ActorEntity Trait
//!
//! The contract a resource (customer, product, order) implements so a generic
//! [`ResourceActor`](crate::ResourceActor) can own and serve it. Associated
//! types pin down the id, the create/update payloads, custom actions and the
//! error type, so a product update can never be sent to the customer store.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// Hooks are async and receive the actor's `Context`, which is injected when the
/// actor is started with [`ResourceActor::run`](crate::ResourceActor::run).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier. The actor generates ids from a `u32` sequence.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload used to modify an existing instance, alone or as part of a batch.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations that are neither create nor update.
    type Action: Send + Sync + Debug;

    /// Result returned by [`ActorEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per entity, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its generated id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place.
    ///
    /// Inside a batch update the hook runs against a staged copy; returning an
    /// error discards the whole batch.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
