//! # Transaction Mediator
//!
//! Translates evidence operations into contract calls on the shared ledger
//! session and interprets the results.
//!
//! | Operation        | Contract call                          | Result |
//! |------------------|----------------------------------------|--------|
//! | `add_evidence`   | `submit("AddEvidence", 10 args)`       | caller's cid + transaction hash |
//! | `get_evidence`   | `evaluate("GetEvidence", [id])`        | decoded [`EvidenceRecord`] |
//! | `update_status`  | `submit("UpdateStatus", [id, status])` | nothing |
//!
//! ## Delivery
//!
//! Each operation makes exactly one ledger call. Nothing is retried: a
//! failed submission has an unknown outcome.
//!
//! ## Cancellation
//!
//! The ledger call runs on its own spawned task. If the HTTP request is
//! dropped (client disconnect, server-side timeout), the handler future
//! stops awaiting but the transaction still runs to completion and its
//! outcome is logged and counted.

use evidence_core::{
    EvidenceRecord, EvidenceSubmission, Operation, RecordDecodeError, TransactionRequest,
};
use evidence_ledger_client::{LedgerError, Session};

use crate::middleware::metrics::ApiMetrics;

/// Result of a successful `AddEvidence` submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    /// Content identifier supplied by the caller, echoed back.
    pub cid: String,
    /// Ledger result bytes, read as text.
    pub tx_hash: String,
}

/// Errors from a mediated ledger operation.
#[derive(Debug, thiserror::Error)]
pub enum MediatorError {
    /// The ledger (gateway or contract) reported an error.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The ledger answered but the payload was not a valid record.
    #[error(transparent)]
    Decode(#[from] RecordDecodeError),

    /// The ledger task panicked or was cancelled by runtime shutdown.
    #[error("ledger call {operation} did not complete: {reason}")]
    Aborted { operation: Operation, reason: String },
}

/// Stateless mediator over one established [`Session`].
#[derive(Debug, Clone)]
pub struct TransactionMediator {
    session: Session,
    metrics: ApiMetrics,
}

impl TransactionMediator {
    pub fn new(session: Session, metrics: ApiMetrics) -> Self {
        Self { session, metrics }
    }

    /// The underlying ledger session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Register a new evidence record.
    pub async fn add_evidence(
        &self,
        submission: &EvidenceSubmission,
    ) -> Result<Submitted, MediatorError> {
        let payload = self
            .dispatch(TransactionRequest::add_evidence(submission))
            .await?;
        Ok(Submitted {
            cid: submission.cid.clone(),
            tx_hash: String::from_utf8_lossy(&payload).into_owned(),
        })
    }

    /// Read an evidence record.
    pub async fn get_evidence(&self, id: &str) -> Result<EvidenceRecord, MediatorError> {
        let payload = self.dispatch(TransactionRequest::get_evidence(id)).await?;
        tracing::debug!(
            id,
            raw = %String::from_utf8_lossy(&payload),
            "GetEvidence payload"
        );
        Ok(EvidenceRecord::from_ledger_bytes(&payload)?)
    }

    /// Change an evidence record's status. Transition rules belong to the
    /// contract.
    pub async fn update_status(&self, id: &str, status: &str) -> Result<(), MediatorError> {
        self.dispatch(TransactionRequest::update_status(id, status))
            .await?;
        Ok(())
    }

    /// Run one ledger call on a detached task and wait for it.
    async fn dispatch(&self, request: TransactionRequest) -> Result<Vec<u8>, MediatorError> {
        let operation = request.operation;
        let session = self.session.clone();
        let metrics = self.metrics.clone();

        let task = tokio::spawn(async move {
            let args = request.arg_refs();
            let result = if operation.is_submit() {
                session.submit(request.function(), &args).await
            } else {
                session.evaluate(request.function(), &args).await
            };
            metrics.record_ledger_call(operation.is_submit(), result.is_ok());
            match &result {
                Ok(_) => tracing::info!(%operation, "ledger call completed"),
                Err(e) => tracing::warn!(
                    %operation,
                    outcome_unknown = e.outcome_unknown(),
                    error = %e,
                    "ledger call failed"
                ),
            }
            result
        });

        match task.await {
            Ok(result) => Ok(result?),
            Err(join) => {
                tracing::error!(%operation, error = %join, "ledger task aborted");
                Err(MediatorError::Aborted {
                    operation,
                    reason: join.to_string(),
                })
            }
        }
    }
}
