//! # Framework Errors
//!
//! This module defines the common error types used throughout the synchronizer.
//! Every failure at the backing-store boundary is a [`NetworkFailure`]; the actor
//! wraps it in [`FrameworkError`] together with the mailbox failures that can
//! happen between a client and its actor.

/// The single failure kind a backing store can report.
///
/// Whatever the cause (host unreachable, non-success status, undecodable body),
/// the synchronizer treats it the same way: log it and keep the previous rows.
#[derive(Debug, thiserror::Error)]
pub enum NetworkFailure {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("malformed store payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("store unreachable: {0}")]
    Unreachable(String),
    #[error("invalid store URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Errors that can occur within the synchronizer framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Network failure: {0}")]
    Network(#[from] NetworkFailure),
}

impl FrameworkError {
    /// Returns true when the error came from the backing store rather than the mailbox.
    pub fn is_network(&self) -> bool {
        matches!(self, FrameworkError::Network(_))
    }
}
