//! Generic synchronizer for remote key-value JSON collections.
//!
//! This module provides the building blocks for mirroring a backing-store collection
//! as an id-bearing, read-only row collection owned by a single actor.
//!
//! # Main Components
//!
//! - [`SyncEntity`] - Trait that record types implement to be synchronized
//! - [`SyncActor`] - Actor that owns the rows and serialises all store traffic
//! - [`SyncClient`] - Cloneable handle for issuing operations and observing snapshots
//! - [`RowCollection`] / [`Row`] - The normalized projection of a store collection
//! - [`BackingStore`] - Seam to the remote store
//! - [`FrameworkError`] / [`NetworkFailure`] - Error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod row;
pub mod store;

// Re-export core types for convenience
pub use actor::SyncActor;
pub use client::SyncClient;
pub use entity::SyncEntity;
pub use error::{FrameworkError, NetworkFailure};
pub use message::{Response, SyncRequest};
pub use row::{Row, RowCollection, Snapshot, StoredCollection, SyncState};
pub use store::{BackingStore, SharedStore};
