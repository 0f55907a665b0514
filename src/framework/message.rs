//! # Synchronizer Messages
//!
//! This module defines the message types used for communication between the
//! [`SyncClient`](crate::framework::SyncClient) and the
//! [`SyncActor`](crate::framework::SyncActor).

use crate::framework::{FrameworkError, Snapshot, SyncEntity};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the synchronizer actor.
///
/// Every variant answers with the snapshot the operation ended on. Mutations are
/// composite: `Create` and `Delete` first send the mutation to the store, then run the
/// same refresh as `Refresh`, and only then reply.
///
/// - **Refresh**: Rebuild the rows from the store.
/// - **Create**: Insert a record (the store picks its key), then refresh.
/// - **Delete**: Remove the record at `id`, then refresh.
#[derive(Debug)]
pub enum SyncRequest<T: SyncEntity> {
    Refresh {
        respond_to: Response<Snapshot<T>>,
    },
    Create {
        record: T,
        respond_to: Response<Snapshot<T>>,
    },
    Delete {
        id: String,
        respond_to: Response<Snapshot<T>>,
    },
}
