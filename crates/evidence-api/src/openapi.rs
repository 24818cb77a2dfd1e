//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI document
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Evidence Ledger Gateway",
        version = "0.3.2",
        description = "Register, read, and update evidence records held on a permissioned ledger.",
        license(name = "BUSL-1.1")
    ),
    paths(
        crate::routes::health::health,
        crate::routes::evidence::add_evidence,
        crate::routes::evidence::get_evidence,
        crate::routes::evidence::update_status,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::routes::health::HealthResponse,
        evidence_core::EvidenceSubmission,
        evidence_core::StatusUpdate,
        evidence_core::EvidenceRecord,
        crate::routes::evidence::AddEvidenceResponse,
        crate::routes::evidence::MessageResponse,
    )),
    tags(
        (name = "evidence", description = "Evidence records on the ledger"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
