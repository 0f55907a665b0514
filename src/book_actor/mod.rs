//! # Book Synchronizer
//!
//! Book-specific wiring of the generic [`SyncActor`](crate::framework::SyncActor).
//!
//! ## Structure
//!
//! - [`entity`] - [`SyncEntity`](crate::framework::SyncEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use bookstore_inventory::book_actor;
//! use bookstore_inventory::model::Book;
//! use bookstore_inventory::store::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = book_actor::new(32);
//!     tokio::spawn(actor.run(Arc::new(MemoryStore::<Book>::new())));
//!
//!     let rows = client.add_book(Book::new("Dune", "Herbert", "1965", "123", "9.99")).await?;
//!     assert_eq!(rows.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BookClient;
use crate::framework::SyncActor;
use crate::model::Book;

/// Creates a new Book synchronizer actor and its client.
pub fn new(mailbox_capacity: usize) -> (SyncActor<Book>, BookClient) {
    let (actor, generic_client) = SyncActor::new(mailbox_capacity);
    (actor, BookClient::new(generic_client))
}
