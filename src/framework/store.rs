//! # Backing Store Seam
//!
//! The actor never talks HTTP directly. It is handed an implementation of
//! [`BackingStore`] when its run loop starts, which keeps the remote store swappable:
//! [`HttpStore`](crate::store::HttpStore) in production,
//! [`MemoryStore`](crate::store::MemoryStore) in tests and demos.

use crate::framework::{NetworkFailure, StoredCollection, SyncEntity};
use async_trait::async_trait;
use std::sync::Arc;

/// The three operations a remote key-value JSON collection offers.
#[async_trait]
pub trait BackingStore<T: SyncEntity>: Send + Sync {
    /// Reads the whole collection. `Ok(None)` means the store answered with nothing.
    async fn list(&self) -> Result<Option<StoredCollection<T>>, NetworkFailure>;

    /// Inserts a record.
    ///
    /// Returns the key the store assigned when it reported one. A store that accepts the
    /// record without naming a key still succeeds with `None`.
    async fn create(&self, record: &T) -> Result<Option<String>, NetworkFailure>;

    /// Removes the record at `id`. Removing an unknown key is not an error.
    async fn delete(&self, id: &str) -> Result<(), NetworkFailure>;
}

/// Shared handle to a backing store, as injected into [`SyncActor::run`](crate::framework::SyncActor::run).
pub type SharedStore<T> = Arc<dyn BackingStore<T>>;
