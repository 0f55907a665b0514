//! In-process backing store.
//!
//! Behaves like the remote collection (store-assigned keys, silent delete of unknown
//! keys) without a network. Used by tests and by the CLI's `--memory` mode. It can also
//! be switched offline to exercise failure handling, and it logs every call it receives.

use crate::framework::{BackingStore, NetworkFailure, StoredCollection, SyncEntity};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// One request a [`MemoryStore`] has received, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    List,
    Create,
    Delete(String),
}

#[derive(Debug)]
struct Inner<T> {
    records: StoredCollection<T>,
    next_key: u64,
    calls: Vec<StoreCall>,
}

/// A [`BackingStore`] kept in memory.
#[derive(Debug)]
pub struct MemoryStore<T> {
    inner: Mutex<Inner<T>>,
    offline: AtomicBool,
}

impl<T: SyncEntity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SyncEntity> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(std::iter::empty::<(String, T)>())
    }

    /// Creates a store that already holds `records` under the given keys.
    pub fn with_records(records: impl IntoIterator<Item = (impl Into<String>, T)>) -> Self {
        let records: StoredCollection<T> = records
            .into_iter()
            .map(|(key, record)| (key.into(), record))
            .collect();
        Self {
            inner: Mutex::new(Inner {
                records,
                next_key: 1,
                calls: Vec::new(),
            }),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every call fails with [`NetworkFailure::Unreachable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Every call received so far, including the ones that failed.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// The records currently held, keyed as the store keys them.
    pub fn records(&self) -> StoredCollection<T> {
        self.lock().records.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_online(&self) -> Result<(), NetworkFailure> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(NetworkFailure::Unreachable(format!(
                "memory store for {} is offline",
                T::COLLECTION
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: SyncEntity> BackingStore<T> for MemoryStore<T> {
    async fn list(&self) -> Result<Option<StoredCollection<T>>, NetworkFailure> {
        self.lock().calls.push(StoreCall::List);
        self.check_online()?;
        let records = self.lock().records.clone();
        Ok((!records.is_empty()).then_some(records))
    }

    async fn create(&self, record: &T) -> Result<Option<String>, NetworkFailure> {
        self.lock().calls.push(StoreCall::Create);
        self.check_online()?;

        let mut inner = self.lock();
        let key = loop {
            let candidate = format!("k{}", inner.next_key);
            inner.next_key += 1;
            if !inner.records.contains_key(&candidate) {
                break candidate;
            }
        };
        inner.records.insert(key.clone(), record.clone());
        debug!(collection = T::COLLECTION, %key, "Memory store insert");
        Ok(Some(key))
    }

    async fn delete(&self, id: &str) -> Result<(), NetworkFailure> {
        self.lock().calls.push(StoreCall::Delete(id.to_string()));
        self.check_online()?;
        self.lock().records.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;

    #[tokio::test]
    async fn test_generated_keys_skip_existing_ones() {
        let store = MemoryStore::with_records([("k1", Book::default())]);
        let key = store.create(&Book::default()).await.unwrap();
        assert_eq!(key.as_deref(), Some("k2"));
        assert_eq!(store.records().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_store_lists_as_absent() {
        let store = MemoryStore::<Book>::new();
        assert!(store.list().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_deleting_unknown_key_is_silent() {
        let store = MemoryStore::with_records([("k1", Book::default())]);
        store.delete("nope").await.unwrap();
        assert_eq!(store.records().len(), 1);
    }

    #[tokio::test]
    async fn test_offline_store_fails_every_call() {
        let store = MemoryStore::<Book>::new();
        store.set_offline(true);
        assert!(matches!(store.list().await, Err(NetworkFailure::Unreachable(_))));
        assert!(store.create(&Book::default()).await.is_err());
        assert!(store.delete("k1").await.is_err());
        assert!(store.records().is_empty());
        assert_eq!(
            store.calls(),
            vec![StoreCall::List, StoreCall::Create, StoreCall::Delete("k1".to_string())]
        );
    }
}
