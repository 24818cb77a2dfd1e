//! # evidence-api: Binary Entry Point
//!
//! Establishes the ledger session, then serves the HTTP API. Startup fails
//! with a non-zero exit if the session cannot be established.

use clap::Parser;
use evidence_ledger_client::{EnvMetadataProvider, HttpGatewayConnector, SessionOptions};
use tracing_subscriber::EnvFilter;

use evidence_api::state::{AppConfig, DEFAULT_PORT};

/// Evidence ledger gateway.
///
/// The session binding is read from `FABRIC_USER`, `CONTRACT_NAME`, and
/// `REGENERATE_CONFIG`. Wallet, profile, and channel locations come from
/// `WALLET_PATH`, `CONNECTION_PROFILE`, and `CHANNEL_NAME`; profile
/// generation inputs from `LEDGER_GATEWAY_URL`, `LEDGER_TLS_CA_CERT`, and
/// `LEDGER_MSP_ID`.
#[derive(Parser, Debug)]
#[command(name = "evidence-api", version, about, long_about = None)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "API_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log_format);

    let config = AppConfig { port: args.port };
    let options = SessionOptions::from_env();

    let state = evidence_api::bootstrap::bootstrap(
        config,
        &options,
        &EnvMetadataProvider,
        &HttpGatewayConnector::default(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Ledger session could not be established: {e}");
        e
    })?;

    let app = evidence_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Evidence API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
