//! # Request and Ledger Metrics
//!
//! Lightweight in-process counters using atomics. HTTP counters are
//! maintained by [`metrics_middleware`]; ledger counters are maintained by
//! the transaction mediator when a contract call completes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Shared metrics state. Clones share the same counters.
#[derive(Debug, Clone)]
pub struct ApiMetrics {
    pub request_count: Arc<AtomicU64>,
    pub error_count: Arc<AtomicU64>,
    pub ledger_submits: Arc<AtomicU64>,
    pub ledger_evaluates: Arc<AtomicU64>,
    pub ledger_failures: Arc<AtomicU64>,
}

impl ApiMetrics {
    /// Create a new metrics instance.
    pub fn new() -> Self {
        Self {
            request_count: Arc::new(AtomicU64::new(0)),
            error_count: Arc::new(AtomicU64::new(0)),
            ledger_submits: Arc::new(AtomicU64::new(0)),
            ledger_evaluates: Arc::new(AtomicU64::new(0)),
            ledger_failures: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Return current request count.
    pub fn requests(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Return current error count.
    pub fn errors(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Completed ledger submissions, successful or not.
    pub fn submits(&self) -> u64 {
        self.ledger_submits.load(Ordering::Relaxed)
    }

    /// Completed ledger evaluations, successful or not.
    pub fn evaluates(&self) -> u64 {
        self.ledger_evaluates.load(Ordering::Relaxed)
    }

    /// Ledger calls that returned an error.
    pub fn ledger_failures(&self) -> u64 {
        self.ledger_failures.load(Ordering::Relaxed)
    }

    /// Count one completed ledger call.
    pub fn record_ledger_call(&self, submit: bool, ok: bool) {
        let counter = if submit {
            &self.ledger_submits
        } else {
            &self.ledger_evaluates
        };
        counter.fetch_add(1, Ordering::Relaxed);
        if !ok {
            self.ledger_failures.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware that increments request and error counters.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        m.request_count.fetch_add(1, Ordering::Relaxed);
        if response.status().is_server_error() || response.status().is_client_error() {
            m.error_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    response
}
