//! # SyncEntity Trait
//!
//! The `SyncEntity` trait defines the contract a record type must satisfy to be mirrored
//! by the generic [`SyncActor`](crate::framework::SyncActor). The backing store keeps
//! records as a JSON object keyed by opaque strings, so an entity only needs to be
//! (de)serializable and to name the collection resource it lives under.
//!
//! # Architecture Note
//! The actor, the client, the rows and the store trait are all written once against this
//! trait. A `Book` store and, say, a `Customer` store would share every line of that code
//! and differ only in their `SyncEntity` implementation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait that any record must implement to be synchronized by a [`SyncActor`](crate::framework::SyncActor).
///
/// The record itself never carries its id. Ids belong to the store and are attached
/// on the way out as [`Row::id`](crate::framework::Row::id).
///
/// `Default` is the record shown for a stored entry that cannot be read as `Self`.
pub trait SyncEntity:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Name of the collection resource in the backing store (e.g. `books`).
    const COLLECTION: &'static str;
}
