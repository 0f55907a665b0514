//! Error types for the Book synchronizer.

use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// The backing store could not be reached or answered with something unusable.
    /// The grid keeps showing the previous rows.
    #[error("Book store unavailable: {0}")]
    StoreUnavailable(String),

    /// An error occurred while communicating with the synchronizer actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
