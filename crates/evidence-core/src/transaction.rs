//! # Contract Operations and Argument Encoding
//!
//! Every contract call is a function name plus an ordered list of strings.
//! The deployed contract parses arguments positionally, so the order and the
//! textual rendering of each field are part of the call ABI:
//!
//! | Operation      | Mode     | Arguments |
//! |----------------|----------|-----------|
//! | `AddEvidence`  | submit   | name, description, caseId, collectedBy, collectionTimestamp, location, cid, fileSize, checksum, passwordProtected |
//! | `GetEvidence`  | evaluate | id |
//! | `UpdateStatus` | submit   | id, status |
//!
//! `fileSize` renders in base 10 with no sign, padding, or separators.
//! Booleans render as the lowercase tokens `true` / `false`. `fileType` is
//! accepted from clients but is not an argument of `AddEvidence`.
//!
//! Changing any of this requires a coordinated contract upgrade.

use crate::record::EvidenceSubmission;

/// A contract function exposed by the evidence chaincode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Register a new evidence record.
    AddEvidence,
    /// Read an evidence record by identifier.
    GetEvidence,
    /// Change the status of an evidence record.
    UpdateStatus,
}

impl Operation {
    /// The function name as registered in the contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddEvidence => "AddEvidence",
            Self::GetEvidence => "GetEvidence",
            Self::UpdateStatus => "UpdateStatus",
        }
    }

    /// Whether the operation mutates ledger state and must be submitted for
    /// ordering rather than evaluated against a single peer.
    pub fn is_submit(&self) -> bool {
        match self {
            Self::AddEvidence | Self::UpdateStatus => true,
            Self::GetEvidence => false,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contract invocation: function plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    /// The contract function to invoke.
    pub operation: Operation,
    /// Positional string arguments.
    pub args: Vec<String>,
}

impl TransactionRequest {
    /// Encode an `AddEvidence` call.
    pub fn add_evidence(submission: &EvidenceSubmission) -> Self {
        Self {
            operation: Operation::AddEvidence,
            args: vec![
                submission.name.clone(),
                submission.description.clone(),
                submission.case_id.clone(),
                submission.collected_by.clone(),
                submission.collection_timestamp.clone(),
                submission.location.clone(),
                submission.cid.clone(),
                render_file_size(submission.file_size),
                submission.checksum.clone(),
                render_bool(submission.password_protected),
            ],
        }
    }

    /// Encode a `GetEvidence` query.
    pub fn get_evidence(id: &str) -> Self {
        Self {
            operation: Operation::GetEvidence,
            args: vec![id.to_string()],
        }
    }

    /// Encode an `UpdateStatus` call.
    pub fn update_status(id: &str, status: &str) -> Self {
        Self {
            operation: Operation::UpdateStatus,
            args: vec![id.to_string(), status.to_string()],
        }
    }

    /// Function name as sent to the contract.
    pub fn function(&self) -> &'static str {
        self.operation.as_str()
    }

    /// Arguments as string slices, in call order.
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Render a file size the way the contract's integer parser expects.
pub fn render_file_size(size: u64) -> String {
    size.to_string()
}

/// Render a boolean as the lowercase `true` / `false` token.
pub fn render_bool(value: bool) -> String {
    let token = if value { "true" } else { "false" };
    token.to_string()
}
