//! Pure data structures for the inventory: the [`Book`] record and its grid [`Column`]s.

pub mod book;

pub use book::*;
