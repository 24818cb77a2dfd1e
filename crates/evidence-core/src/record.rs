//! # Evidence Records
//!
//! Request/response-scoped representations of an evidence record. The
//! authoritative copy lives on the ledger; these types exist only long enough
//! to translate a request into contract arguments or a contract payload into
//! a response.
//!
//! Field names serialize in camelCase to match the external JSON contract
//! (`caseId`, `collectedBy`, `fileSize`, ...).

use serde::{Deserialize, Serialize};

use crate::error::RecordDecodeError;

/// Fields a client supplies to register a new piece of evidence.
///
/// Absent fields take their zero value (empty string, `0`, `false`) and are
/// still submitted. A field of the wrong JSON type is a decode failure, and
/// `file_size` is unsigned, so a negative size never reaches the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct EvidenceSubmission {
    /// Human-readable name, usually the original file name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Case the evidence belongs to.
    pub case_id: String,
    /// Identity of the person or system that collected the evidence.
    pub collected_by: String,
    /// Collection time as supplied by the client. Passed through untouched.
    pub collection_timestamp: String,
    /// Collection location as supplied by the client.
    pub location: String,
    /// Content identifier of the file in content-addressed storage.
    pub cid: String,
    /// File size in bytes.
    pub file_size: u64,
    /// MIME type or extension of the file.
    pub file_type: String,
    /// Checksum of the file content.
    pub checksum: String,
    /// Whether the stored file is password protected.
    pub password_protected: bool,
}

/// New status for an existing evidence record. An absent status is sent as
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct StatusUpdate {
    /// Status token. Transition rules are enforced by the contract, not here.
    pub status: String,
}

/// An evidence record as returned by the contract's `GetEvidence` query.
///
/// Decoding is lenient about presence: missing fields take their default and
/// unknown fields are ignored, since the contract may evolve its schema.
/// A field of the wrong JSON type is a decode failure.
///
/// A `null` payload is a decode failure rather than an empty record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct EvidenceRecord {
    /// Ledger-assigned identifier, when the contract includes it.
    #[serde(alias = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// See [`EvidenceSubmission::name`].
    pub name: String,
    /// See [`EvidenceSubmission::description`].
    pub description: String,
    /// See [`EvidenceSubmission::case_id`].
    pub case_id: String,
    /// See [`EvidenceSubmission::collected_by`].
    pub collected_by: String,
    /// See [`EvidenceSubmission::collection_timestamp`].
    pub collection_timestamp: String,
    /// See [`EvidenceSubmission::location`].
    pub location: String,
    /// See [`EvidenceSubmission::cid`].
    pub cid: String,
    /// See [`EvidenceSubmission::file_size`].
    pub file_size: u64,
    /// See [`EvidenceSubmission::file_type`].
    pub file_type: String,
    /// See [`EvidenceSubmission::checksum`].
    pub checksum: String,
    /// See [`EvidenceSubmission::password_protected`].
    pub password_protected: bool,
    /// Lifecycle status, when the contract reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl EvidenceRecord {
    /// Decode a `GetEvidence` payload.
    ///
    /// On failure the raw bytes are returned inside the error.
    pub fn from_ledger_bytes(bytes: &[u8]) -> Result<Self, RecordDecodeError> {
        serde_json::from_slice(bytes).map_err(|e| RecordDecodeError::new(e, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_submission_json() -> serde_json::Value {
        serde_json::json!({
            "name": "log.txt",
            "description": "auth log",
            "caseId": "CASE-7",
            "collectedBy": "officer.lee",
            "collectionTimestamp": "2026-03-01T10:00:00Z",
            "location": "Server room B",
            "cid": "Qm123",
            "fileSize": 42,
            "fileType": "text/plain",
            "checksum": "abc",
            "passwordProtected": false
        })
    }

    #[test]
    fn submission_decodes_camel_case() {
        let sub: EvidenceSubmission = serde_json::from_value(sample_submission_json()).unwrap();
        assert_eq!(sub.case_id, "CASE-7");
        assert_eq!(sub.collected_by, "officer.lee");
        assert_eq!(sub.file_size, 42);
        assert!(!sub.password_protected);
    }

    #[test]
    fn submission_rejects_negative_file_size() {
        let mut body = sample_submission_json();
        body["fileSize"] = serde_json::json!(-1);
        assert!(serde_json::from_value::<EvidenceSubmission>(body).is_err());
    }

    #[test]
    fn submission_rejects_string_boolean() {
        let mut body = sample_submission_json();
        body["passwordProtected"] = serde_json::json!("false");
        assert!(serde_json::from_value::<EvidenceSubmission>(body).is_err());
    }

    #[test]
    fn submission_defaults_missing_fields() {
        let sub: EvidenceSubmission = serde_json::from_value(serde_json::json!({
            "name": "log.txt",
            "cid": "Qm123",
            "fileSize": 42
        }))
        .unwrap();
        assert_eq!(sub.name, "log.txt");
        assert_eq!(sub.case_id, "");
        assert_eq!(sub.checksum, "");
        assert!(!sub.password_protected);
    }

    #[test]
    fn status_update_defaults_to_empty() {
        let update: StatusUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update.status, "");
    }

    #[test]
    fn record_rejects_null_payload() {
        let err = EvidenceRecord::from_ledger_bytes(b"null").unwrap_err();
        assert_eq!(err.raw, "null");
    }

    #[test]
    fn record_decodes_partial_payload() {
        let record =
            EvidenceRecord::from_ledger_bytes(br#"{"ID":"E1","name":"log.txt","fileSize":42}"#)
                .unwrap();
        assert_eq!(record.id.as_deref(), Some("E1"));
        assert_eq!(record.name, "log.txt");
        assert_eq!(record.file_size, 42);
        assert_eq!(record.checksum, "");
        assert!(record.status.is_none());
    }

    #[test]
    fn record_ignores_unknown_fields() {
        let record = EvidenceRecord::from_ledger_bytes(
            br#"{"name":"a","docType":"evidence","custodyChain":[]}"#,
        )
        .unwrap();
        assert_eq!(record.name, "a");
    }

    #[test]
    fn record_rejects_non_json_and_keeps_raw() {
        let err = EvidenceRecord::from_ledger_bytes(b"corrupt").unwrap_err();
        assert_eq!(err.raw, "corrupt");
    }

    #[test]
    fn record_rejects_wrong_field_type() {
        let err = EvidenceRecord::from_ledger_bytes(br#"{"fileSize":"42"}"#).unwrap_err();
        assert_eq!(err.raw, r#"{"fileSize":"42"}"#);
    }

    #[test]
    fn record_omits_absent_optional_fields() {
        let json = serde_json::to_value(EvidenceRecord::default()).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("status").is_none());
        assert_eq!(json["passwordProtected"], false);
        assert_eq!(json["fileSize"], 0);
    }
}
