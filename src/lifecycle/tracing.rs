//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module targets are hidden; every synchronizer event carries a
//! `collection` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, and shutdown with the final row count
//! - **Messages**: each `Refresh`, `Create` and `Delete` at `debug`, with its payload
//! - **Refreshes**: the published row count at `info`
//! - **Failures**: every store error at `warn`, with the rows still on display
//! - **Store requests**: method and URL at `debug`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info bookstore list
//! RUST_LOG=debug bookstore add --title Dune --author Herbert
//! RUST_LOG=bookstore_inventory::store=debug bookstore list
//! ```
//!
//! A failed refresh at `info` level looks like:
//!
//! ```text
//! INFO Synchronizer started collection="books"
//! WARN Refresh failed, keeping previous rows collection="books" error=store returned HTTP 503 for https://.../books.json stale_rows=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
