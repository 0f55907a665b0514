//! Type-safe wrappers around [`SyncClient`](crate::framework::SyncClient).

pub mod book_client;
pub mod collection_client;

pub use book_client::*;
pub use collection_client::*;
