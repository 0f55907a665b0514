//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`SyncClient<T>`] whose mailbox is answered from a
//! queue of expectations instead of by a [`SyncActor`](crate::framework::SyncActor). It
//! lets you test code that sits *around* the client (domain wrappers, display code)
//! without a backing store.
//!
//! ## When to use Mocks vs a Real Actor
//!
//! | Feature | MockClient | SyncActor + MemoryStore |
//! |---------|------------|-------------------------|
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real rows, real keys |
//! | **Use Case** | Unit testing logic around the client | Testing the synchronizer itself |
//! | **Error Injection** | Any `FrameworkError` via `return_err` | `MemoryStore::set_offline` |
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use bookstore_inventory::framework::mock::MockClient;
//! use bookstore_inventory::framework::{FrameworkError, NetworkFailure};
//! use bookstore_inventory::model::Book;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Book>::new();
//!     mock.expect_refresh()
//!         .return_err(FrameworkError::Network(NetworkFailure::Unreachable("down".into())));
//!
//!     let result = mock.client().refresh().await;
//!     assert!(matches!(result, Err(FrameworkError::Network(_))));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw mailbox receiver, or use the
//! fluent [`MockClient`] API.

use crate::framework::{
    FrameworkError, Row, RowCollection, Snapshot, StoredCollection, SyncClient, SyncEntity,
    SyncRequest, SyncState,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply the mock should give it.
enum Expectation<T: SyncEntity> {
    Refresh {
        response: Result<Snapshot<T>, FrameworkError>,
    },
    Create {
        response: Result<Snapshot<T>, FrameworkError>,
    },
    Delete {
        id: String,
        response: Result<Snapshot<T>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Successful replies are also published to the client's snapshot channel, the way a
/// real actor would publish them.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Book>::new();
/// mock.expect_create().return_ok(snapshot_of([("k1", book)]));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: SyncEntity> {
    client: SyncClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: SyncEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SyncEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SyncRequest<T>>(100);
        let (rows, rows_rx) = watch::channel(Arc::new(RowCollection::default()));
        let (_state, state_rx) = watch::channel(SyncState::Idle);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Answer requests from the expectation queue
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                let (respond_to, response) = match (request, expectation) {
                    (SyncRequest::Refresh { respond_to }, Some(Expectation::Refresh { response })) => {
                        (respond_to, response)
                    }
                    (
                        SyncRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => (respond_to, response),
                    (
                        SyncRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Delete sent for unexpected id");
                        (respond_to, response)
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                };

                if let Ok(snapshot) = &response {
                    rows.send_replace(snapshot.clone());
                }
                let _ = respond_to.send(response);
            }
        });

        Self {
            client: SyncClient::new(sender, rows_rx, state_rx),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SyncClient<T> {
        self.client.clone()
    }

    /// Expects a `refresh` operation.
    pub fn expect_refresh(&mut self) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            kind: ExpectedKind::Refresh,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            kind: ExpectedKind::Create,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: impl Into<String>) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            kind: ExpectedKind::Delete(id.into()),
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

enum ExpectedKind {
    Refresh,
    Create,
    Delete(String),
}

/// Builder that records what the mock should reply to one expected request.
pub struct ExpectationBuilder<T: SyncEntity> {
    kind: ExpectedKind,
    expectations: Expectations<T>,
}

impl<T: SyncEntity> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, snapshot: Snapshot<T>) {
        self.push(Ok(snapshot));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Snapshot<T>, FrameworkError>) {
        let expectation = match self.kind {
            ExpectedKind::Refresh => Expectation::Refresh { response },
            ExpectedKind::Create => Expectation::Create { response },
            ExpectedKind::Delete(id) => Expectation::Delete { id, response },
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Builds a snapshot from `(id, record)` pairs, as a store response would.
pub fn snapshot_of<T: SyncEntity>(
    rows: impl IntoIterator<Item = (impl Into<String>, T)>,
) -> Snapshot<T> {
    let stored: StoredCollection<T> = rows
        .into_iter()
        .map(|(id, record)| (id.into(), record))
        .collect();
    Arc::new(RowCollection::from_stored(Some(stored)))
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The client sends its messages to a channel the test controls. The test reads them
/// off the receiver, asserts on them, and answers through the `respond_to` sender,
/// which lets it simulate success, failure and delays deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: SyncEntity>(
    buffer_size: usize,
) -> (SyncClient<T>, mpsc::Receiver<SyncRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_rows, rows_rx) = watch::channel(Arc::new(RowCollection::default()));
    let (_state, state_rx) = watch::channel(SyncState::Idle);
    (SyncClient::new(sender, rows_rx, state_rx), receiver)
}

type Responder<T> = oneshot::Sender<Result<Snapshot<T>, FrameworkError>>;

/// Helper to verify that the next message is a Refresh request
pub async fn expect_refresh<T: SyncEntity>(
    receiver: &mut mpsc::Receiver<SyncRequest<T>>,
) -> Option<Responder<T>> {
    match receiver.recv().await {
        Some(SyncRequest::Refresh { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: SyncEntity>(
    receiver: &mut mpsc::Receiver<SyncRequest<T>>,
) -> Option<(T, Responder<T>)> {
    match receiver.recv().await {
        Some(SyncRequest::Create { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: SyncEntity>(
    receiver: &mut mpsc::Receiver<SyncRequest<T>>,
) -> Option<(String, Responder<T>)> {
    match receiver.recv().await {
        Some(SyncRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Convenience for asserting on a snapshot's rows without the `Arc`.
pub fn rows_of<T: SyncEntity>(snapshot: &Snapshot<T>) -> Vec<Row<T>> {
    snapshot.iter().cloned().collect()
}
