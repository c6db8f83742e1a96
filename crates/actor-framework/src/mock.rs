//! # Mocks for Resource Clients
//!
//! Two ways to stand in for a `ResourceActor` in tests:
//!
//! - [`MockClient`]: queue canned answers with `expect_*` builders; requests are
//!   answered in order and [`MockClient::verify`] checks nothing was left over.
//! - [`create_mock_client`] plus the `expect_*` receiver helpers: drive the
//!   channel by hand when the test needs to inspect the request payload, for
//!   example the exact stock updates a service sent.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | canned answers | real store |
//! | Error injection | `return_err` | needs a crafted state |
//! | Use case | logic around the client | the actor itself, full flows |
//!
//! ```rust,ignore
//! let mut products = MockClient::<Product>::new();
//! products.expect_get_many().return_ok(vec![widget.clone()]);
//! products.expect_update_many().return_err(FrameworkError::ActorClosed);
//!
//! let catalog = ProductClient::new(products.client());
//! // ... exercise code that uses the catalog ...
//! products.verify();
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// One queued answer. The request kind must match when it is consumed.
enum Expectation<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    GetMany(Result<Vec<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Create(Result<T::Id, FrameworkError>),
    Update(Result<T, FrameworkError>),
    UpdateMany(Result<Vec<T>, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get(_) => "Get",
            Expectation::GetMany(_) => "GetMany",
            Expectation::List(_) => "List",
            Expectation::Create(_) => "Create",
            Expectation::Update(_) => "Update",
            Expectation::UpdateMany(_) => "UpdateMany",
            Expectation::Delete(_) => "Delete",
            Expectation::Action(_) => "Action",
        }
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::GetMany { .. } => "GetMany",
        ResourceRequest::List { .. } => "List",
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::UpdateMany { .. } => "UpdateMany",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
    }
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// A request that arrives with no matching expectation gets its response
/// channel dropped, so the caller sees [`FrameworkError::ActorDropped`], and
/// the mismatch is recorded for [`MockClient::verify`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Needs a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let recorded = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::GetMany { respond_to, .. },
                        Some(Expectation::GetMany(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::UpdateMany { respond_to, .. },
                        Some(Expectation::UpdateMany(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action(response)),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let expected = expectation.map(|e| e.kind()).unwrap_or("nothing");
                        let got = request_kind(&request);
                        recorded
                            .lock()
                            .unwrap()
                            .push(format!("expected {expected}, got {got}"));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::Get)
    }

    /// Expects a `get_many` operation.
    pub fn expect_get_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::GetMany)
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Create)
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Update)
    }

    /// Expects an `update_many` operation.
    pub fn expect_update_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::UpdateMany)
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, ()> {
        self.builder(Expectation::Delete)
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Expectation::Action)
    }

    fn builder<R>(
        &mut self,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if an expectation is still queued or a request did not match.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {}", mismatches.join("; "));
        }
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            let kinds: Vec<_> = remaining.iter().map(|e| e.kind()).collect();
            panic!("Not all expectations were met. Remaining: {kinds:?}");
        }
    }
}

/// Queues the answer for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message if it is a GetMany request.
pub async fn expect_get_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<T::Id>, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Next message if it is an UpdateMany request.
pub async fn expect_update_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Vec<(T::Id, T::Update)>,
    oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::UpdateMany {
            updates,
            respond_to,
        }) => Some((updates, respond_to)),
        _ => None,
    }
}

/// Next message if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
    }

    #[derive(Debug)]
    struct ShelfRelabel(String);

    #[derive(Debug)]
    enum ShelfAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Shelf error")]
    struct ShelfError;

    #[async_trait]
    impl ActorEntity for Shelf {
        type Id = u32;
        type Create = ShelfCreate;
        type Update = ShelfRelabel;
        type Action = ShelfAction;
        type ActionResult = ();
        type Context = ();
        type Error = ShelfError;

        fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, update: ShelfRelabel, _ctx: &()) -> Result<(), Self::Error> {
            self.label = update.0;
            Ok(())
        }

        async fn handle_action(&mut self, action: ShelfAction, _ctx: &()) -> Result<(), Self::Error> {
            match action {}
        }
    }

    fn shelf(id: u32, label: &str) -> Shelf {
        Shelf {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers_expose_payloads() {
        let (client, mut receiver) = create_mock_client::<Shelf>(10);

        let task = tokio::spawn(async move {
            client
                .update_many(vec![(1, ShelfRelabel("A1".into())), (2, ShelfRelabel("B2".into()))])
                .await
        });

        let (updates, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected UpdateMany request");
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].0, 2);
        assert_eq!(updates[1].1 .0, "B2");
        responder.send(Ok(vec![shelf(1, "A1"), shelf(2, "B2")])).unwrap();

        let result = task.await.unwrap().unwrap();
        assert_eq!(result[0].label, "A1");
    }

    #[tokio::test]
    async fn test_mock_client_answers_in_order() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get_many().return_ok(vec![shelf(1, "top")]);
        mock.expect_delete().return_err(FrameworkError::NotFound("1".into()));

        let client = mock.client();
        let id = client.create(ShelfCreate { label: "top".into() }).await.unwrap();
        assert_eq!(id, 1);
        let found = client.get_many(vec![1]).await.unwrap();
        assert_eq!(found, vec![shelf(1, "top")]);
        assert!(matches!(client.delete(1).await, Err(FrameworkError::NotFound(_))));

        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_is_dropped_and_recorded() {
        let mut mock = MockClient::<Shelf>::new();
        mock.expect_get().return_ok(None);

        let result = mock.client().list().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verify = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verify.is_err());
    }
}
