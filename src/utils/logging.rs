//! Structured logging setup.
use tracing_subscriber::EnvFilter;

use crate::constants::api::DEFAULT_LOG_FILTER;

/// Install the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
