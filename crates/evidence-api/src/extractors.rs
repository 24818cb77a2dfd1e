//! # Request Body Extraction
//!
//! Handlers take `Result<Json<T>, JsonRejection>` and pass it through
//! [`extract_json`], so every body failure becomes the same 400 response
//! before any ledger call is made.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Extract a JSON body, mapping every rejection to [`AppError::BadRequest`].
///
/// Covers malformed JSON, wrong field types, and a missing or wrong
/// `Content-Type`. Absent fields are left to the body type's defaults. The rejection text is kept for logging only.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
