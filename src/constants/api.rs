//! Constants related to the general configuration of the entire API and its deployment.

use std::{env::var, sync::LazyLock};

/// The socket address the HTTP listener binds to.
pub static API_BIND_ADDRESS: LazyLock<String> =
    LazyLock::new(|| var("API_BIND_ADDRESS").unwrap_or_else(|_| String::from("0.0.0.0:8080")));

/// The default `tracing` filter when `RUST_LOG` is not provided.
pub const DEFAULT_LOG_FILTER: &str = "info";
