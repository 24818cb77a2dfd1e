//! # Server Bootstrap
//!
//! Establishes the ledger session and builds the application state.
//!
//! ## Bootstrap Sequence
//!
//! 1. **Establish Session**: config, profile, wallet, identity, gateway,
//!    channel, contract (see [`evidence_ledger_client::session`]).
//! 2. **Build State**: wrap the session in the transaction mediator.
//! 3. **Log Identity**: Structured startup banner.
//!
//! Any failure aborts startup. The listener is bound only after this
//! returns successfully, so traffic is never served without a session.

use evidence_ledger_client::{
    establish, GatewayConnector, MetadataProvider, Session, SessionError, SessionOptions,
};

use crate::state::{AppConfig, AppState};

/// Establish the ledger session and build the application state.
pub async fn bootstrap(
    config: AppConfig,
    options: &SessionOptions,
    metadata: &dyn MetadataProvider,
    connector: &dyn GatewayConnector,
) -> Result<AppState, SessionError> {
    let session = establish(options, metadata, connector).await?;
    log_banner(&config, &session);
    Ok(AppState::with_config(config, session))
}

fn log_banner(config: &AppConfig, session: &Session) {
    tracing::info!(
        port = config.port,
        identity = %session.identity(),
        channel = %session.channel(),
        contract = %session.contract_name(),
        "bootstrap complete"
    );

    println!("┌──────────────────────────────────────────────────┐");
    println!("│  Evidence Ledger Gateway: v{:<22}│", env!("CARGO_PKG_VERSION"));
    println!("├──────────────────────────────────────────────────┤");
    println!("│  Identity:  {:<37}│", session.identity());
    println!("│  Channel:   {:<37}│", session.channel());
    println!("│  Contract:  {:<37}│", session.contract_name());
    println!("│  Port:      {:<37}│", config.port);
    println!("└──────────────────────────────────────────────────┘");
}
