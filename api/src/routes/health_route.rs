//! GET /health — liveness probe.

use axum::Json;
use serde::Serialize;

/// Response payload for /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Handler: GET /health
///
/// Always 200, independent of whether the upstream credential is configured.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Fait AI Proxy Server is running",
    })
}
