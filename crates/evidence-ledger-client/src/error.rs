//! Ledger call error types.

/// Errors from ledger gateway calls.
///
/// The upstream message is carried verbatim so it can be surfaced to API
/// callers unchanged.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// HTTP transport error. The outcome of a submission that fails here is
    /// unknown: the gateway may or may not have forwarded it for ordering.
    #[error("transport error calling {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The gateway or the contract rejected the call.
    #[error("{endpoint} returned {status}: {message}")]
    Rejected {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// The ledger client could not be configured (TLS material, client build).
    #[error("ledger client configuration error: {0}")]
    Client(String),
    /// Error reported by a non-HTTP contract implementation.
    #[error("{0}")]
    Contract(String),
}

impl LedgerError {
    /// The ledger's own error text, without the endpoint and status prefix
    /// added by the HTTP client. This is what API callers see.
    pub fn upstream_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Contract(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the call may have reached the ledger despite failing.
    pub fn outcome_unknown(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
