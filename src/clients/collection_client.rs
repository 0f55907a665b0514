use crate::framework::{FrameworkError, Snapshot, SyncClient, SyncEntity};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for resource-specific clients to inherit the standard synchronizer operations.
///
/// This trait reduces boilerplate by providing default implementations for the
/// operations every collection shares (`refresh`, `delete`, reading the rows).
/// Implementors supply the inner [`SyncClient`] and the error mapping.
#[async_trait]
pub trait CollectionClient<T: SyncEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic SyncClient.
    fn inner(&self) -> &SyncClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Rebuild the rows from the backing store.
    #[tracing::instrument(skip(self))]
    async fn refresh(&self) -> Result<Snapshot<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().refresh().await.map_err(Self::map_error)
    }

    /// Delete a record by id, then refresh.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: String) -> Result<Snapshot<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// The rows most recently published by the synchronizer.
    fn rows(&self) -> Snapshot<T> {
        self.inner().snapshot()
    }

    /// Subscribe to every newly published snapshot.
    fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.inner().subscribe()
    }
}
