//! An API exposing the deployed Streamlit app's base URL to browser clients,
//! which otherwise have no way to learn a value only known at deploy time.
pub mod constants;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
pub fn create_app(state: AppState) -> Router {
    routes::app_url::create_router().with_state(state)
}
