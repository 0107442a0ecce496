//! API routes within the application. Mainly exposes sub-routers which should
//! be merged into the main Axum router.
pub mod app_url;
