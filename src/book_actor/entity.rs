//! SyncEntity trait implementation for the Book domain type.
//!
//! Books live under the `books` collection resource of the backing store.

use crate::framework::SyncEntity;
use crate::model::Book;

impl SyncEntity for Book {
    const COLLECTION: &'static str = "books";
}
