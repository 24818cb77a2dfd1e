//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//!
//! | Variant      | Status | Body |
//! |--------------|--------|------|
//! | `BadRequest` | 400    | `{"error": "Invalid input"}` |
//! | `Ledger`     | 500    | `{"error": <ledger message>}` |
//! | `Decode`     | 500    | `{"error": "Failed to parse response", "raw": <payload>}` |
//! | `Internal`   | 500    | `{"error": "An internal error occurred"}` |
//!
//! Ledger messages are returned exactly as the ledger produced them.
//! Request-body parse details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::mediator::MediatorError;

/// Message returned for every malformed request body.
pub const INVALID_INPUT: &str = "Invalid input";
/// Message returned when a ledger payload does not decode.
pub const PARSE_FAILURE: &str = "Failed to parse response";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// Undecodable ledger payload, present only on parse failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be parsed (400). The detail is logged only.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The ledger rejected or failed the call (500).
    #[error("{0}")]
    Ledger(String),

    /// The ledger returned a payload that is not a valid record (500).
    #[error("failed to parse ledger response: {reason}")]
    Decode { reason: String, raw: String },

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Ledger(_) | Self::Decode { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            Self::BadRequest(_) => ErrorBody {
                error: INVALID_INPUT.to_string(),
                raw: None,
            },
            Self::Ledger(message) => ErrorBody {
                error: message.clone(),
                raw: None,
            },
            Self::Decode { raw, .. } => ErrorBody {
                error: PARSE_FAILURE.to_string(),
                raw: Some(raw.clone()),
            },
            Self::Internal(_) => ErrorBody {
                error: "An internal error occurred".to_string(),
                raw: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest(detail) => tracing::debug!(%detail, "rejected request body"),
            Self::Ledger(_) => tracing::warn!(error = %self, "ledger error"),
            Self::Decode { .. } | Self::Internal(_) => {
                tracing::error!(error = %self, "internal server error")
            }
        }
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<MediatorError> for AppError {
    fn from(err: MediatorError) -> Self {
        match err {
            MediatorError::Ledger(e) => Self::Ledger(e.upstream_message()),
            MediatorError::Decode(e) => Self::Decode {
                reason: e.source.to_string(),
                raw: e.raw,
            },
            aborted @ MediatorError::Aborted { .. } => Self::Internal(aborted.to_string()),
        }
    }
}
