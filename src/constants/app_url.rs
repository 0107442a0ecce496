//! Name of the variable the deployed app's URL is configured through.
//!
//! It is read on every request rather than cached in a static, so the
//! response always reflects the current process environment.

/// Holds the base URL of the deployed Streamlit app.
pub const STREAMLIT_APP_URL: &str = "STREAMLIT_APP_URL";
