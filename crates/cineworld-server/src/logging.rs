//! Log output for the server
//!
//! Filters come from `RUST_LOG`. Without it the server logs its own crates at
//! `info` and request traces from `tower_http` at `debug`, so every request
//! shows up with its status and latency.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Build the log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Call once, before serving.
pub fn setup_logging() {
    fmt().with_env_filter(log_filter()).with_target(true).init();

    tracing::debug!("Log filter installed");
}
