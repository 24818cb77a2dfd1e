//! # Decode Errors
//!
//! Errors raised when a successful ledger evaluation returns a payload that
//! does not parse as the expected record shape.

use thiserror::Error;

/// An evaluation payload that could not be decoded into an
/// [`EvidenceRecord`](crate::EvidenceRecord).
///
/// The raw payload is kept verbatim (lossy UTF-8) so operators can inspect
/// what the contract actually returned.
#[derive(Error, Debug)]
#[error("failed to decode ledger payload: {source}")]
pub struct RecordDecodeError {
    /// The underlying JSON parse failure.
    #[source]
    pub source: serde_json::Error,
    /// The payload exactly as the ledger returned it.
    pub raw: String,
}

impl RecordDecodeError {
    /// Wrap a parse failure together with the bytes that caused it.
    pub fn new(source: serde_json::Error, raw: &[u8]) -> Self {
        Self {
            source,
            raw: String::from_utf8_lossy(raw).into_owned(),
        }
    }
}
