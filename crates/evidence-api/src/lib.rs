//! # evidence-api: HTTP Gateway for Evidence Records
//!
//! A thin JSON API over a permissioned ledger. Every evidence operation is
//! one contract call made through a single long-lived ledger session; the
//! gateway keeps no evidence state of its own.
//!
//! ## API Surface
//!
//! | Route                       | Module                 |
//! |-----------------------------|------------------------|
//! | `GET /health`               | [`routes::health`]     |
//! | `POST /evidence`            | [`routes::evidence`]   |
//! | `GET /evidence/:id`         | [`routes::evidence`]   |
//! | `PUT /evidence/:id/status`  | [`routes::evidence`]   |
//! | `GET /openapi.json`         | [`openapi`]            |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod mediator;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics = state.metrics.clone();

    Router::new()
        .merge(routes::health::router())
        .merge(routes::evidence::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(axum::Extension(metrics))
        .with_state(state)
}
