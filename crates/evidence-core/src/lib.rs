#![deny(missing_docs)]

//! # evidence-core: Foundational Types for the Evidence Ledger Gateway
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It performs no I/O and has no internal crate dependencies: only
//! `serde`, `serde_json`, and `thiserror` from the external ecosystem, plus
//! `utoipa` schemas behind the `openapi` feature.
//!
//! ## Design Principles
//!
//! 1. **The ledger owns evidence state.** [`EvidenceRecord`] exists only for
//!    the duration of a request. Its identifier is assigned by the contract
//!    and is never generated or rewritten here.
//!
//! 2. **[`TransactionRequest`] is the sole path to contract arguments.** Each
//!    operation has exactly one constructor that renders typed fields into the
//!    ordered string tuple the deployed contract parses. The argument order
//!    and the textual forms of numbers and booleans are part of the contract
//!    ABI.
//!
//! 3. **Raw payloads are never dropped.** [`RecordDecodeError`] carries the
//!    undecodable ledger bytes alongside the parse failure.

pub mod error;
pub mod identity;
pub mod record;
pub mod transaction;

pub use error::RecordDecodeError;
pub use identity::IdentityLabel;
pub use record::{EvidenceRecord, EvidenceSubmission, StatusUpdate};
pub use transaction::{Operation, TransactionRequest};
