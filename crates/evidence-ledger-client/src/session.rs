//! # Ledger Session
//!
//! Establishes the single authenticated binding {identity, channel,
//! contract} that the process uses for its whole lifetime.
//!
//! ## Establishment Sequence
//!
//! 1. **Load Config**: wallet path, profile path, channel.
//! 2. **Ensure Profile**: generate the connection profile when it is
//!    missing or regeneration was requested. Happens at most once.
//! 3. **Open Wallet**: file-system credential store.
//! 4. **Resolve Identity**: the configured label must have a credential.
//! 5. **Connect Gateway**: parse the profile and connect as the identity.
//! 6. **Resolve Channel**: join the configured channel.
//! 7. **Bind Contract**: no network traffic.
//!
//! Every failure is fatal: the caller must not serve traffic without a
//! session. A session is never re-established automatically.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use evidence_core::IdentityLabel;

use crate::config::{env_flag, env_or, ConfigError};
use crate::error::LedgerError;
use crate::gateway::{Contract, GatewayConnector};
use crate::identity::{resolve_identity, IdentityError};
use crate::metadata::MetadataProvider;
use crate::profile::{ConnectionProfile, ProfileError};
use crate::wallet::{FileSystemWallet, WalletError};

/// Contract name used when `CONTRACT_NAME` is unset.
pub const DEFAULT_CONTRACT_NAME: &str = "evidencecc";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors during session establishment. All of them are startup-fatal.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to load config: {0}")]
    ConfigLoadFailed(#[source] ConfigError),

    #[error("failed to generate connection profile: {0}")]
    ConnectionMetadataGenerationFailed(#[source] ProfileError),

    #[error("failed to create wallet: {0}")]
    WalletOpenFailed(#[source] WalletError),

    #[error(transparent)]
    IdentityNotFound(#[from] IdentityError),

    #[error("failed to connect to gateway: {0}")]
    GatewayConnectFailed(String),

    #[error("failed to get network {channel}: {source}")]
    ChannelResolutionFailed {
        channel: String,
        #[source]
        source: LedgerError,
    },
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Who to connect as and what to bind to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub identity: IdentityLabel,
    pub contract: String,
    /// Regenerate the connection profile even if one exists.
    pub regenerate_profile: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            identity: IdentityLabel::default(),
            contract: DEFAULT_CONTRACT_NAME.to_string(),
            regenerate_profile: false,
        }
    }
}

impl SessionOptions {
    /// Load options from environment variables.
    ///
    /// Variables:
    /// - `FABRIC_USER` (default: `appUser`)
    /// - `CONTRACT_NAME` (default: `evidencecc`)
    /// - `REGENERATE_CONFIG` (default: `false`)
    pub fn from_env() -> Self {
        Self {
            identity: IdentityLabel::from_option(std::env::var("FABRIC_USER").ok()),
            contract: env_or("CONTRACT_NAME", DEFAULT_CONTRACT_NAME),
            regenerate_profile: env_flag("REGENERATE_CONFIG"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// An established ledger session.
///
/// Cloning is cheap and every clone shares the same contract handle. The
/// session is never mutated after establishment, so it is shared without
/// locking.
#[derive(Clone)]
pub struct Session {
    identity: IdentityLabel,
    channel: String,
    contract: Arc<dyn Contract>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("channel", &self.channel)
            .field("contract", &self.contract.name())
            .finish()
    }
}

impl Session {
    /// Wrap an already-bound contract.
    pub fn new(identity: IdentityLabel, channel: impl Into<String>, contract: Arc<dyn Contract>) -> Self {
        Self {
            identity,
            channel: channel.into(),
            contract,
        }
    }

    pub fn identity(&self) -> &IdentityLabel {
        &self.identity
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn contract_name(&self) -> &str {
        self.contract.name()
    }

    /// Submit a transaction for ordering. Called exactly once per logical
    /// operation; never retried.
    pub async fn submit(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        let started = Instant::now();
        let result = self.contract.submit(function, args).await;
        self.log_outcome("submit", function, started, &result);
        result
    }

    /// Evaluate a read-only query.
    pub async fn evaluate(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        let started = Instant::now();
        let result = self.contract.evaluate(function, args).await;
        self.log_outcome("evaluate", function, started, &result);
        result
    }

    fn log_outcome(
        &self,
        mode: &'static str,
        function: &str,
        started: Instant,
        result: &Result<Vec<u8>, LedgerError>,
    ) {
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match result {
            Ok(payload) => tracing::debug!(
                mode,
                function,
                contract = self.contract.name(),
                elapsed_ms,
                payload_len = payload.len(),
                "ledger call succeeded"
            ),
            Err(e) => tracing::warn!(
                mode,
                function,
                contract = self.contract.name(),
                elapsed_ms,
                error = %e,
                "ledger call failed"
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Establishment
// ---------------------------------------------------------------------------

/// Run the establishment sequence.
pub async fn establish(
    options: &SessionOptions,
    metadata: &dyn MetadataProvider,
    connector: &dyn GatewayConnector,
) -> Result<Session, SessionError> {
    let paths = metadata
        .load_config()
        .map_err(SessionError::ConfigLoadFailed)?;
    tracing::info!(
        wallet = %paths.wallet_path.display(),
        profile = %paths.profile_path.display(),
        channel = %paths.channel,
        "ledger configuration loaded"
    );

    ensure_profile(&paths.profile_path, options.regenerate_profile, metadata)?;

    let wallet = FileSystemWallet::open(&paths.wallet_path).map_err(SessionError::WalletOpenFailed)?;
    tracing::debug!(wallet = %wallet.root().display(), "wallet opened");
    let identity = resolve_identity(&options.identity, &wallet)?;

    let profile = ConnectionProfile::load(&paths.profile_path)
        .map_err(|e| SessionError::GatewayConnectFailed(e.to_string()))?;
    let gateway = connector
        .connect(&profile, &identity)
        .await
        .map_err(|e| SessionError::GatewayConnectFailed(e.to_string()))?;

    let network = gateway
        .network(&paths.channel)
        .await
        .map_err(|source| SessionError::ChannelResolutionFailed {
            channel: paths.channel.clone(),
            source,
        })?;
    let contract = network.contract(&options.contract);

    tracing::info!(
        identity = %identity.label,
        msp_id = %identity.credential.msp_id,
        channel = %paths.channel,
        contract = %options.contract,
        "ledger session established"
    );

    Ok(Session::new(identity.label, paths.channel, contract))
}

fn ensure_profile(
    profile_path: &Path,
    regenerate: bool,
    metadata: &dyn MetadataProvider,
) -> Result<(), SessionError> {
    if regenerate {
        tracing::info!(path = %profile_path.display(), "regenerating connection profile");
    } else if profile_path.exists() {
        return Ok(());
    } else {
        tracing::info!(path = %profile_path.display(), "connection profile not found, generating");
    }
    metadata
        .generate(profile_path)
        .map_err(SessionError::ConnectionMetadataGenerationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryContract, InMemoryLedger};

    #[test]
    fn options_from_env_apply_defaults_and_flag() {
        std::env::remove_var("FABRIC_USER");
        std::env::set_var("CONTRACT_NAME", "custodycc");
        std::env::set_var("REGENERATE_CONFIG", "True");
        let options = SessionOptions::from_env();
        std::env::remove_var("CONTRACT_NAME");
        std::env::remove_var("REGENERATE_CONFIG");

        assert_eq!(options.identity.as_str(), "appUser");
        assert_eq!(options.contract, "custodycc");
        assert!(options.regenerate_profile);
    }

    #[test]
    fn debug_shows_binding_only() {
        let ledger = InMemoryLedger::new("mychannel");
        let session = Session::new(
            IdentityLabel::default(),
            "mychannel",
            Arc::new(InMemoryContract::new(&ledger, "evidencecc")),
        );
        let rendered = format!("{session:?}");
        assert!(rendered.contains("appUser"));
        assert!(rendered.contains("evidencecc"));
    }
}
