//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one entity type and answers requests one
//! at a time. Because a single task holds the store, a batch update is
//! naturally atomic: no other request can interleave with it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::{HashMap, HashSet};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// Create it with [`ResourceActor::new`], hand the returned client to callers
/// and spawn [`ResourceActor::run`] with the entity's context. The loop ends
/// once every client clone has been dropped.
///
/// Ids are generated from an internal `u32` counter starting at 1.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client. `buffer_size` bounds the request
    /// channel; senders wait once it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "storefront::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = self.get_many(&ids);
                    debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::UpdateMany {
                    updates,
                    respond_to,
                } => {
                    debug!(entity_type, ?updates, "UpdateMany");
                    let result = self.update_many(updates, &context).await;
                    match &result {
                        Ok(items) => info!(entity_type, count = items.len(), "Batch updated"),
                        Err(e) => warn!(entity_type, error = %e, "Batch update rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Entities for the known ids, each at most once. Unknown ids are skipped.
    fn get_many(&self, ids: &[T::Id]) -> Vec<T> {
        let mut seen = HashSet::with_capacity(ids.len());
        ids.iter()
            .filter(|id| seen.insert((*id).clone()))
            .filter_map(|id| self.store.get(id).cloned())
            .collect()
    }

    /// Applies every update to a staged copy and commits only if all succeed.
    ///
    /// Several updates for the same id are applied in order, each on top of the
    /// previous staged state. The result holds the committed state of every
    /// touched entity, in first-touch order.
    async fn update_many(
        &mut self,
        updates: Vec<(T::Id, T::Update)>,
        context: &T::Context,
    ) -> Result<Vec<T>, FrameworkError> {
        let mut staged: Vec<(T::Id, T)> = Vec::with_capacity(updates.len());

        for (id, update) in updates {
            let slot = match staged.iter().position(|(staged_id, _)| *staged_id == id) {
                Some(slot) => slot,
                None => {
                    let item = self
                        .store
                        .get(&id)
                        .cloned()
                        .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
                    staged.push((id, item));
                    staged.len() - 1
                }
            };
            staged[slot]
                .1
                .on_update(update, context)
                .await
                .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        }

        let mut committed = Vec::with_capacity(staged.len());
        for (id, item) in staged {
            self.store.insert(id, item.clone());
            committed.push(item);
        }
        Ok(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Bin {
        id: u32,
        units: u32,
    }

    #[derive(Debug)]
    struct BinCreate {
        units: u32,
    }

    /// Sets the unit count; refuses to go above the bin's capacity of 100.
    #[derive(Debug)]
    struct BinUpdate {
        units: u32,
    }

    #[derive(Debug)]
    enum BinAction {
        Count,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("bin over capacity: {0}")]
    struct OverCapacity(u32);

    #[async_trait]
    impl ActorEntity for Bin {
        type Id = u32;
        type Create = BinCreate;
        type Update = BinUpdate;
        type Action = BinAction;
        type ActionResult = u32;
        type Context = ();
        type Error = OverCapacity;

        fn from_create_params(id: u32, params: BinCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                units: params.units,
            })
        }

        async fn on_update(&mut self, update: BinUpdate, _ctx: &()) -> Result<(), Self::Error> {
            if update.units > 100 {
                return Err(OverCapacity(update.units));
            }
            self.units = update.units;
            Ok(())
        }

        async fn handle_action(&mut self, action: BinAction, _ctx: &()) -> Result<u32, Self::Error> {
            match action {
                BinAction::Count => Ok(self.units),
            }
        }
    }

    async fn spawn_bins(units: &[u32]) -> (ResourceClient<Bin>, Vec<u32>) {
        let (actor, client) = ResourceActor::<Bin>::new(10);
        tokio::spawn(actor.run(()));
        let mut ids = Vec::new();
        for &units in units {
            ids.push(client.create(BinCreate { units }).await.unwrap());
        }
        (client, ids)
    }

    #[tokio::test]
    async fn test_crud_and_actions() {
        let (client, ids) = spawn_bins(&[7]).await;
        let id = ids[0];
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, BinAction::Count).await.unwrap(), 7);

        let updated = client.update(id, BinUpdate { units: 9 }).await.unwrap();
        assert_eq!(updated.units, 9);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
        assert!(matches!(
            client.delete(id).await,
            Err(FrameworkError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_many_skips_unknown_and_repeated_ids() {
        let (client, ids) = spawn_bins(&[1, 2, 3]).await;

        let mut found = client.get_many(vec![ids[2], 42, ids[0], ids[2]]).await.unwrap();
        found.sort_by_key(|bin| bin.id);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].units, 1);
        assert_eq!(found[1].units, 3);
        assert_eq!(client.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_many_commits_all_updates() {
        let (client, ids) = spawn_bins(&[1, 2]).await;

        let updated = client
            .update_many(vec![
                (ids[0], BinUpdate { units: 10 }),
                (ids[1], BinUpdate { units: 20 }),
                (ids[0], BinUpdate { units: 11 }),
            ])
            .await
            .unwrap();

        assert_eq!(updated, vec![Bin { id: 1, units: 11 }, Bin { id: 2, units: 20 }]);
        assert_eq!(client.get(ids[0]).await.unwrap().unwrap().units, 11);
    }

    #[tokio::test]
    async fn test_update_many_is_all_or_nothing() {
        let (client, ids) = spawn_bins(&[1, 2]).await;

        let result = client
            .update_many(vec![
                (ids[0], BinUpdate { units: 50 }),
                (ids[1], BinUpdate { units: 500 }),
            ])
            .await;
        let err = result.unwrap_err().into_entity_error::<OverCapacity>().unwrap();
        assert_eq!(err.0, 500);

        let missing = client
            .update_many(vec![(ids[0], BinUpdate { units: 50 }), (99, BinUpdate { units: 1 })])
            .await;
        assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "99"));

        assert_eq!(client.get(ids[0]).await.unwrap().unwrap().units, 1);
        assert_eq!(client.get(ids[1]).await.unwrap().unwrap().units, 2);
    }
}
