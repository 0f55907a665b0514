//! # System Lifecycle & Orchestration
//!
//! Starts the book synchronizer, injects its backing store, and shuts it down.
//!
//! ## Late Binding
//!
//! The actor is created without a store. The store is handed over when the actor task
//! starts:
//!
//! ```rust,ignore
//! let (book_actor, book_client) = book_actor::new(config.mailbox_capacity);
//! tokio::spawn(book_actor.run(Arc::new(HttpStore::new(&config)?)));
//! ```
//!
//! Tests use the same path with a [`MemoryStore`](crate::store::MemoryStore) via
//! [`InventorySystem::with_store`].
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the mailbox
//! 2. **Actor drains** - Requests already queued are still answered
//! 3. **Actor exits** - Logs its final row count
//! 4. **Await completion** - [`InventorySystem::shutdown`] joins the task
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber. See the [`tracing`] module.

pub mod inventory_system;
pub mod tracing;

pub use inventory_system::*;
pub use tracing::*;
