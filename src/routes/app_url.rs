//! The endpoint browsers call to discover where the Streamlit app is deployed.
use axum::{
    extract::State,
    http::{header, Method, Uri},
    response::IntoResponse,
    Json, Router,
};
use serde::Serialize;

use crate::{services::app_url, state::AppState};

/// Create a router answering every method on every path with the app URL.
pub fn create_router() -> Router<AppState> {
    Router::new().fallback(get_app_url)
}

#[derive(Serialize, Debug, PartialEq, Eq)]
/// The response to any request.
pub struct AppUrlResponse {
    /// The configured app URL, or an empty string when none is configured.
    pub url: String,
}

/// Report the configured app URL. Readable from any origin.
async fn get_app_url(
    method: Method,
    uri: Uri,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let url = app_url::resolve_app_url(&state.config);
    tracing::debug!("{method} {} -> {url:?}", uri.path());
    (
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(AppUrlResponse { url }),
    )
}
