//! # Bookstore Inventory
//!
//! > **A bookstore inventory kept in sync with a remote JSON collection.**
//!
//! A single actor owns the list of books as last read from the backing store. Display
//! code holds a cheap client handle: it reads the published rows, and asks the actor to
//! refresh, add a book or delete one. Every mutation is followed by a fresh read, so the
//! rows always reflect the store rather than a local guess.
//!
//! ## Core Concepts
//!
//! ### One owner, many readers
//! The rows are published through a `tokio::sync::watch` channel as an immutable
//! `Arc` snapshot. Readers never lock anything and never see a half-built collection.
//!
//! ### One queue for all store traffic
//! Refreshes, creates and deletes go through one mailbox and run one at a time, so two
//! reads of the store can never race to publish.
//!
//! ### Failures keep the last good rows
//! A store failure is logged, returned to the caller as a `Result`, and leaves the
//! previous snapshot on display.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`SyncActor`](framework::SyncActor) and [`SyncClient`](framework::SyncClient),
//! the [`RowCollection`](framework::RowCollection) they publish, and the
//! [`BackingStore`](framework::BackingStore) seam.
//!
//! ### 2. The Stores ([`store`])
//! [`HttpStore`](store::HttpStore) for the REST collection and
//! [`MemoryStore`](store::MemoryStore) for tests and offline use.
//!
//! ### 3. The Interface ([`clients`], [`grid`])
//! [`BookClient`](clients::BookClient) wraps the generic client with book-specific
//! operations and errors. [`grid`] sorts and filters a snapshot for display.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`InventorySystem`](lifecycle::InventorySystem) starts the actor with its store and
//! shuts it down. [`InventoryConfig`](config::InventoryConfig) reads the settings.
//!
//! ### 5. The Domain ([`model`], [`book_actor`])
//! The [`Book`](model::Book) record and its synchronizer wiring.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- list
//! RUST_LOG=info cargo run -- --memory add --title Dune --author Herbert
//! cargo test
//! ```

pub mod book_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod grid;
pub mod lifecycle;
pub mod model;
pub mod store;
