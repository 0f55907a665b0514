//! # Synchronizer Actor
//!
//! This module defines the `SyncActor`, the component that owns the row collection for
//! one entity type. It implements the "Server" side of the Actor Model: it processes
//! messages sequentially and is the only writer of the published snapshot.

use crate::framework::{
    FrameworkError, RowCollection, SharedStore, Snapshot, SyncClient, SyncEntity, SyncRequest,
    SyncState,
};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The actor that mirrors a backing-store collection as a [`RowCollection`].
///
/// # Architecture Note
/// This struct is the "Server" half of the synchronizer. It owns the receiver end of the
/// mailbox and the sending half of the snapshot channel.
///
/// **Concurrency Model**:
/// All store traffic goes through this one task, one message at a time. A `Create` runs
/// its POST *and* the refresh that follows before the next message is even looked at,
/// so two refreshes can never overlap and the last published snapshot is always the
/// most recent store state this process has read.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `SyncActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass the backing store into `actor.run(store)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use bookstore_inventory::framework::SyncActor;
/// use bookstore_inventory::model::Book;
/// use bookstore_inventory::store::MemoryStore;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = SyncActor::<Book>::new(10);
///     tokio::spawn(actor.run(Arc::new(MemoryStore::<Book>::new())));
///
///     let rows = client.refresh().await.unwrap();
///     assert!(rows.is_empty());
/// }
/// ```
///
/// # Operations
///
/// * **Refresh**: list the collection, rebuild the rows, publish them. On failure the
///   previous snapshot stays published.
/// * **Create**: send the record to the store; on success refresh, on failure reply
///   with the error and leave the rows alone.
/// * **Delete**: same as create, with a removal.
pub struct SyncActor<T: SyncEntity> {
    receiver: mpsc::Receiver<SyncRequest<T>>,
    rows: watch::Sender<Snapshot<T>>,
    state: watch::Sender<SyncState>,
}

impl<T: SyncEntity> SyncActor<T> {
    /// Creates a new `SyncActor` and its associated `SyncClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the mailbox. If it is full, calls to the client
    ///   wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `SyncActor` instance (the server), which must be run via `.run()`.
    /// 2. The `SyncClient` instance, which can be cloned and shared to send requests.
    pub fn new(buffer_size: usize) -> (Self, SyncClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (rows, rows_rx) = watch::channel(Arc::new(RowCollection::default()));
        let (state, state_rx) = watch::channel(SyncState::Idle);
        let actor = Self {
            receiver,
            rows,
            state,
        };
        let client = SyncClient::new(sender, rows_rx, state_rx);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the mailbox closes.
    ///
    /// # Store Injection
    /// The backing store is handed over here rather than in `new()`, so the actor and its
    /// client can be created and wired before the store exists.
    pub async fn run(mut self, store: SharedStore<T>) {
        let collection = T::COLLECTION;
        info!(collection, "Synchronizer started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SyncRequest::Refresh { respond_to } => {
                    debug!(collection, "Refresh");
                    let result = self.refresh(&store).await;
                    let _ = respond_to.send(result);
                }
                SyncRequest::Create { record, respond_to } => {
                    debug!(collection, ?record, "Create");
                    let result = match store.create(&record).await {
                        Ok(key) => {
                            debug!(collection, ?key, "Store accepted record");
                            self.refresh(&store).await
                        }
                        Err(e) => {
                            warn!(collection, error = %e, "Create failed");
                            Err(FrameworkError::Network(e))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                SyncRequest::Delete { id, respond_to } => {
                    debug!(collection, %id, "Delete");
                    let result = match store.delete(&id).await {
                        Ok(()) => self.refresh(&store).await,
                        Err(e) => {
                            warn!(collection, %id, error = %e, "Delete failed");
                            Err(FrameworkError::Network(e))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(collection, rows = self.rows.borrow().len(), "Shutdown");
    }

    /// Rebuilds the rows from the store and publishes them.
    ///
    /// The published snapshot is only ever replaced by a complete new collection; a
    /// failed list leaves it untouched.
    async fn refresh(&self, store: &SharedStore<T>) -> Result<Snapshot<T>, FrameworkError> {
        let collection = T::COLLECTION;
        self.state.send_replace(SyncState::Refreshing);

        let result = match store.list().await {
            Ok(stored) => {
                let snapshot = Arc::new(RowCollection::from_stored(stored));
                self.rows.send_replace(snapshot.clone());
                info!(collection, rows = snapshot.len(), "Refreshed");
                Ok(snapshot)
            }
            Err(e) => {
                warn!(
                    collection,
                    error = %e,
                    stale_rows = self.rows.borrow().len(),
                    "Refresh failed, keeping previous rows"
                );
                Err(FrameworkError::Network(e))
            }
        };

        self.state.send_replace(SyncState::Idle);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::{MemoryStore, StoreCall};
    use pretty_assertions::assert_eq;

    fn book(title: &str) -> Book {
        Book {
            title: title.to_string(),
            author: "Anon".to_string(),
            ..Book::default()
        }
    }

    fn spawn(store: Arc<MemoryStore<Book>>) -> SyncClient<Book> {
        let (actor, client) = SyncActor::<Book>::new(10);
        tokio::spawn(actor.run(store));
        client
    }

    #[tokio::test]
    async fn test_refresh_publishes_snapshot() {
        let store = Arc::new(MemoryStore::with_records([("k1", book("Dune"))]));
        let client = spawn(store);
        let mut updates = client.subscribe();

        let rows = client.refresh().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.get("k1").unwrap().record.title, "Dune");

        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), rows);
        assert_eq!(client.snapshot(), rows);
        assert_eq!(client.state(), SyncState::Idle);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_rows() {
        let store = Arc::new(MemoryStore::with_records([("k1", book("Dune"))]));
        let client = spawn(store.clone());
        let before = client.refresh().await.unwrap();

        store.set_offline(true);
        let err = client.refresh().await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(client.snapshot(), before);
    }

    #[tokio::test]
    async fn test_failed_create_does_not_refresh() {
        let store = Arc::new(MemoryStore::new());
        let client = spawn(store.clone());
        store.set_offline(true);

        let result = client.create(book("Lost")).await;
        assert!(matches!(result, Err(FrameworkError::Network(_))));
        assert!(client.snapshot().is_empty());
        assert_eq!(store.calls(), vec![StoreCall::Create]);
    }

    #[tokio::test]
    async fn test_mutations_refresh_after_store_replies() {
        let store = Arc::new(MemoryStore::new());
        let client = spawn(store.clone());

        let rows = client.create(book("Foo")).await.unwrap();
        let id = rows.ids().next().unwrap().to_string();
        client.delete(id.clone()).await.unwrap();

        assert_eq!(
            store.calls(),
            vec![
                StoreCall::Create,
                StoreCall::List,
                StoreCall::Delete(id),
                StoreCall::List,
            ]
        );
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_serialised() {
        let store = Arc::new(MemoryStore::new());
        let client = spawn(store.clone());

        let mut handles = vec![];
        for i in 0..8 {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                client.create(book(&format!("Book {i}"))).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // Every create is immediately followed by its own list.
        let calls = store.calls();
        assert_eq!(calls.len(), 16);
        for pair in calls.chunks(2) {
            assert_eq!(pair, [StoreCall::Create, StoreCall::List]);
        }
        assert_eq!(client.snapshot().len(), 8);
    }

    #[tokio::test]
    async fn test_actor_exits_when_clients_dropped() {
        let (actor, client) = SyncActor::<Book>::new(4);
        let handle = tokio::spawn(actor.run(Arc::new(MemoryStore::<Book>::new())));
        drop(client);
        handle.await.unwrap();
    }
}
