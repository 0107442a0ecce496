//! Defines the state shared across the Axum application.
use std::{collections::HashMap, env, sync::Arc};

#[derive(Clone, Debug)]
/// The state struct shared across routers.
pub struct AppState {
    /// Where configuration values are looked up on each request.
    pub config: ConfigSource,
}

impl AppState {
    /// State backed by the live process environment.
    pub const fn from_env() -> Self {
        Self {
            config: ConfigSource::Environment,
        }
    }
}

/// A read-only view of process-wide configuration.
#[derive(Clone, Debug)]
pub enum ConfigSource {
    /// Read `std::env` on every lookup.
    Environment,
    /// An immutable set of variables, for embedding and tests.
    Fixed(Arc<HashMap<String, String>>),
}

impl ConfigSource {
    /// Build a fixed source from key/value pairs.
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fixed(Arc::new(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    /// Look up a variable. Unset and non-Unicode values are both `None`.
    pub fn var(&self, key: &str) -> Option<String> {
        match self {
            Self::Environment => env::var(key).ok(),
            Self::Fixed(vars) => vars.get(key).cloned(),
        }
    }
}
