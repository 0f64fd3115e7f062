//! # Tracing Setup
//!
//! Installs the global subscriber used by the binary and by tests that
//! want request-level visibility. Filtering follows `RUST_LOG`, so
//! `RUST_LOG=debug` shows every gateway request.

use tracing_subscriber::EnvFilter;

/// Initializes the compact console subscriber.
///
/// Call once at startup; a second call panics because the global
/// subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
