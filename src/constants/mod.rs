//! Constants (primary environment variables) used across the application.
pub mod api;
pub mod app_url;
