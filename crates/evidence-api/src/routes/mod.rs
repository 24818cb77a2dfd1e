//! # API Route Modules
//!
//! - `evidence`: register, read, and re-status evidence records on the
//!   ledger through the transaction mediator.
//! - `health`: liveness check. Never touches the ledger session.

pub mod evidence;
pub mod health;
