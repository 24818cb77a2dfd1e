//! # HTTP Middleware
//!
//! - [`metrics`]: request/error counters plus ledger call counters.
//! - [`tracing_layer`]: structured request spans.

pub mod metrics;
pub mod tracing_layer;
