//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// GET /
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { message: "Healthy" })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(health))
}
