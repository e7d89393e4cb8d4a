use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Current server time, ISO-8601.
    pub timestamp: String,
}

/// GET /api/health -- returns service health and the current timestamp.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Mount health check routes (mounted under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
