//! REST JSON backing store.
//!
//! Talks to a Firebase Realtime Database style endpoint, where every resource path ends
//! in `.json`:
//!
//! | Operation | Request |
//! |---|---|
//! | list | `GET {base}/{collection}.json` |
//! | create | `POST {base}/{collection}.json` → any 2xx; `{"name": "<key>"}` is logged when present |
//! | delete | `DELETE {base}/{collection}/{id}.json` |

use crate::config::InventoryConfig;
use crate::framework::{BackingStore, NetworkFailure, StoredCollection, SyncEntity};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Body the store answers a create with.
#[derive(Debug, Deserialize)]
struct CreatedKey {
    name: String,
}

/// A [`BackingStore`] reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStore<T> {
    client: Client,
    base: Url,
    _entity: PhantomData<fn() -> T>,
}

impl<T: SyncEntity> HttpStore<T> {
    /// Creates a store client for `config.store_url`.
    pub fn new(config: &InventoryConfig) -> Result<Self, NetworkFailure> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Self::with_client(builder.build()?, &config.store_url)
    }

    /// Uses an existing `reqwest` client. Trailing slashes on `base_url` are ignored.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, NetworkFailure> {
        let invalid = |reason: String| NetworkFailure::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };
        let base =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        Ok(Self {
            client,
            base,
            _entity: PhantomData,
        })
    }

    pub fn collection_url(&self) -> Url {
        self.endpoint(&[format!("{}.json", T::COLLECTION).as_str()])
    }

    /// The record's URL. `id` is percent-encoded as a single path segment.
    pub fn record_url(&self, id: &str) -> Url {
        self.endpoint(&[T::COLLECTION, format!("{id}.json").as_str()])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Rejects non-2xx responses.
fn check_status(response: Response) -> Result<Response, NetworkFailure> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(NetworkFailure::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

/// Decodes a list response. An empty body and JSON `null` both mean "no records".
///
/// Only the outer object must be well formed. Every key yields a record: an entry that
/// does not read as `T` is logged and kept as `T::default()`.
pub fn decode_collection<T: SyncEntity>(
    body: &str,
) -> Result<Option<StoredCollection<T>>, NetworkFailure> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let entries: Option<BTreeMap<String, Value>> = serde_json::from_str(body)?;
    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .map(|(key, value)| {
                let record = decode_record(&key, value);
                (key, record)
            })
            .collect()
    }))
}

fn decode_record<T: SyncEntity>(key: &str, value: Value) -> T {
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(
            collection = T::COLLECTION,
            %key,
            error = %e,
            "Unreadable record, showing it blank"
        );
        T::default()
    })
}

#[async_trait]
impl<T: SyncEntity> BackingStore<T> for HttpStore<T> {
    async fn list(&self) -> Result<Option<StoredCollection<T>>, NetworkFailure> {
        let url = self.collection_url();
        debug!(%url, "GET");
        let response = check_status(self.client.get(url).send().await?)?;
        let body = response.text().await?;
        decode_collection(&body)
    }

    async fn create(&self, record: &T) -> Result<Option<String>, NetworkFailure> {
        let url = self.collection_url();
        debug!(%url, "POST");
        let response = check_status(self.client.post(url).json(record).send().await?)?;
        // The key is informational; an accepted POST succeeds whatever the body says.
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str::<CreatedKey>(&body)
            .ok()
            .map(|created| created.name))
    }

    async fn delete(&self, id: &str) -> Result<(), NetworkFailure> {
        let url = self.record_url(id);
        debug!(%url, "DELETE");
        check_status(self.client.delete(url).send().await?)?;
        Ok(())
    }
}
