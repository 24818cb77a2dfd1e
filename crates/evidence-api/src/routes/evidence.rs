//! # Evidence Routes
//!
//! | Method | Path                    | Ledger call                 |
//! |--------|-------------------------|-----------------------------|
//! | POST   | `/evidence`             | submit `AddEvidence`        |
//! | GET    | `/evidence/:id`         | evaluate `GetEvidence`      |
//! | PUT    | `/evidence/:id/status`  | submit `UpdateStatus`       |
//!
//! Bodies are decoded before the mediator is reached, so a malformed body
//! never produces ledger traffic. Absent fields are not malformed: they are
//! submitted as their zero value.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use evidence_core::{EvidenceRecord, EvidenceSubmission, StatusUpdate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/evidence", post(add_evidence))
        .route("/evidence/:id", get(get_evidence))
        .route("/evidence/:id/status", put(update_status))
}

// -- Request/Response DTOs ----------------------------------------------------
//
// Request bodies decode straight into `EvidenceSubmission` / `StatusUpdate`
// and GET returns `EvidenceRecord`; those carry their own schemas.

/// Successful registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddEvidenceResponse {
    pub message: String,
    pub cid: String,
    /// Transaction identifier returned by the ledger.
    pub tx_hash: String,
}

/// Plain acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// -- Handlers -----------------------------------------------------------------

/// POST /evidence: Register evidence on the ledger.
#[utoipa::path(
    post,
    path = "/evidence",
    request_body = EvidenceSubmission,
    responses(
        (status = 201, description = "Evidence added", body = AddEvidenceResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 500, description = "Ledger error", body = ErrorBody),
    ),
    tag = "evidence"
)]
async fn add_evidence(
    State(state): State<AppState>,
    body: Result<Json<EvidenceSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<AddEvidenceResponse>), AppError> {
    let submission = extract_json(body)?;
    let submitted = state.mediator.add_evidence(&submission).await?;
    tracing::info!(cid = %submitted.cid, tx_hash = %submitted.tx_hash, "evidence added");

    Ok((
        StatusCode::CREATED,
        Json(AddEvidenceResponse {
            message: "Evidence added successfully".to_string(),
            cid: submitted.cid,
            tx_hash: submitted.tx_hash,
        }),
    ))
}

/// GET /evidence/{id}: Read an evidence record from the ledger.
#[utoipa::path(
    get,
    path = "/evidence/{id}",
    params(("id" = String, Path, description = "Evidence identifier")),
    responses(
        (status = 200, description = "Evidence record", body = EvidenceRecord),
        (status = 500, description = "Ledger error or undecodable payload", body = ErrorBody),
    ),
    tag = "evidence"
)]
async fn get_evidence(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EvidenceRecord>, AppError> {
    let record = state.mediator.get_evidence(&id).await?;
    Ok(Json(record))
}

/// PUT /evidence/{id}/status: Change an evidence record's status.
#[utoipa::path(
    put,
    path = "/evidence/{id}/status",
    params(("id" = String, Path, description = "Evidence identifier")),
    request_body = StatusUpdate,
    responses(
        (status = 200, description = "Status updated", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 500, description = "Ledger error", body = ErrorBody),
    ),
    tag = "evidence"
)]
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let update = extract_json(body)?;
    state.mediator.update_status(&id, &update.status).await?;
    tracing::info!(%id, status = %update.status, "evidence status updated");

    Ok(Json(MessageResponse {
        message: "Status updated successfully".to_string(),
    }))
}
