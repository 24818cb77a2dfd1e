//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The state holds no evidence data. Records live on the ledger; the state
//! only carries the mediator bound to the process-wide ledger session,
//! which is established once at startup and shared read-only.

use evidence_ledger_client::Session;

use crate::mediator::TransactionMediator;
use crate::middleware::metrics::ApiMetrics;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Shared application state. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub mediator: TransactionMediator,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Build state around an established session with default config.
    pub fn new(session: Session) -> Self {
        Self::with_config(AppConfig::default(), session)
    }

    /// Build state with explicit config.
    pub fn with_config(config: AppConfig, session: Session) -> Self {
        let metrics = ApiMetrics::new();
        Self {
            config,
            mediator: TransactionMediator::new(session, metrics.clone()),
            metrics,
        }
    }
}
