//! Resolution of the deployed app's base URL.
use crate::{constants::app_url::STREAMLIT_APP_URL, state::ConfigSource};

/// Resolve the URL to hand to clients. Never fails: unset or empty becomes
/// the empty string. The value is not validated.
pub fn resolve_app_url(config: &ConfigSource) -> String {
    config
        .var(STREAMLIT_APP_URL)
        .filter(|url| !url.is_empty())
        .unwrap_or_default()
}
