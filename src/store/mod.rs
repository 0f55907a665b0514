//! Backing-store implementations.
//!
//! - [`HttpStore`] - the remote REST JSON collection
//! - [`MemoryStore`] - an in-process stand-in with failure injection

pub mod http;
pub mod memory;

pub use http::{decode_collection, HttpStore};
pub use memory::{MemoryStore, StoreCall};
