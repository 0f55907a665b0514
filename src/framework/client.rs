//! # Synchronizer Client
//!
//! This module defines the client half of the synchronizer.

use crate::framework::{FrameworkError, Snapshot, SyncEntity, SyncRequest, SyncState};
use tokio::sync::{mpsc, oneshot, watch};

/// ## SyncClient
///
/// The `SyncClient<T>` is the handle display code holds. It forwards operations to a
/// [`SyncActor<T>`](crate::framework::SyncActor) over an mpsc mailbox and awaits the reply
/// on a oneshot channel. It also carries watch receivers for the published rows and
/// the actor state, so reading the current snapshot never touches the mailbox.
///
/// * **Cloneable** – holds only channel handles, so cloning is inexpensive.
/// * **Async API** – operations resolve to `Result<Snapshot<T>, FrameworkError>`.
/// * **Read-only rows** – snapshots are `Arc`s; callers cannot mutate them in place.
#[derive(Clone)]
pub struct SyncClient<T: SyncEntity> {
    sender: mpsc::Sender<SyncRequest<T>>,
    rows: watch::Receiver<Snapshot<T>>,
    state: watch::Receiver<SyncState>,
}

impl<T: SyncEntity> SyncClient<T> {
    pub fn new(
        sender: mpsc::Sender<SyncRequest<T>>,
        rows: watch::Receiver<Snapshot<T>>,
        state: watch::Receiver<SyncState>,
    ) -> Self {
        Self {
            sender,
            rows,
            state,
        }
    }

    /// Rebuilds the rows from the store.
    pub async fn refresh(&self) -> Result<Snapshot<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SyncRequest::Refresh { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Sends `record` to the store, then refreshes.
    ///
    /// The new row (and its store-assigned id) is only visible in the returned snapshot.
    pub async fn create(&self, record: T) -> Result<Snapshot<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SyncRequest::Create { record, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Removes the record at `id` from the store, then refreshes.
    pub async fn delete(&self, id: impl Into<String>) -> Result<Snapshot<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SyncRequest::Delete {
                id: id.into(),
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// The most recently published rows.
    pub fn snapshot(&self) -> Snapshot<T> {
        self.rows.borrow().clone()
    }

    /// A receiver that is notified every time a refresh publishes new rows.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.rows.clone()
    }

    pub fn state(&self) -> SyncState {
        *self.state.borrow()
    }
}
