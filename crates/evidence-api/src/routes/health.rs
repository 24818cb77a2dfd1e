//! # Health Check
//!
//! Reports that the process is up and serving. It does not probe the
//! ledger: the session was established before the listener was bound, and
//! a health check must not generate ledger traffic.

use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// GET /health: Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is running", body = HealthResponse),
    ),
    tag = "health"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "API is running".to_string(),
    })
}
