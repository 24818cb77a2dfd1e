//! Ledger network configuration.
//!
//! Resolves where the wallet and the connection profile live and which
//! channel to join. Every value has a default so a development checkout
//! starts without any environment set.

use std::path::{Path, PathBuf};

/// Default wallet directory.
pub const DEFAULT_WALLET_PATH: &str = "./wallet";
/// Default connection profile location.
pub const DEFAULT_PROFILE_PATH: &str = "./connection-profile.yaml";
/// Default channel.
pub const DEFAULT_CHANNEL: &str = "mychannel";

/// Filesystem locations and channel used to establish a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkPaths {
    /// Directory holding `<label>.id` credential files.
    pub wallet_path: PathBuf,
    /// Connection profile (YAML or JSON).
    pub profile_path: PathBuf,
    /// Channel the contract is deployed on.
    pub channel: String,
}

impl NetworkPaths {
    /// Build and validate an explicit configuration.
    pub fn new(
        wallet_path: impl Into<PathBuf>,
        profile_path: impl Into<PathBuf>,
        channel: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let paths = Self {
            wallet_path: wallet_path.into(),
            profile_path: profile_path.into(),
            channel: channel.into(),
        };
        paths.validate()?;
        Ok(paths)
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `WALLET_PATH` (default: `./wallet`)
    /// - `CONNECTION_PROFILE` (default: `./connection-profile.yaml`)
    /// - `CHANNEL_NAME` (default: `mychannel`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            env_or("WALLET_PATH", DEFAULT_WALLET_PATH),
            env_or("CONNECTION_PROFILE", DEFAULT_PROFILE_PATH),
            env_or("CHANNEL_NAME", DEFAULT_CHANNEL),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_path("WALLET_PATH", &self.wallet_path)?;
        validate_path("CONNECTION_PROFILE", &self.profile_path)?;
        validate_channel(&self.channel)
    }
}

/// Read an environment variable, treating unset and empty the same.
pub fn env_or(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Read a boolean flag; only the literal `true` (any case) enables it.
pub fn env_flag(var: &str) -> bool {
    std::env::var(var)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn validate_path(var: &str, path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            reason: "path is empty".to_string(),
        });
    }
    Ok(())
}

/// Channel names follow the ledger's rule: lowercase ASCII, starting with a
/// letter, then letters, digits, `.` or `-`, at most 249 characters.
fn validate_channel(channel: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        var: "CHANNEL_NAME".to_string(),
        reason: format!("{reason}: {channel:?}"),
    };
    let mut chars = channel.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        Some(_) => return Err(invalid("must start with a lowercase letter")),
        None => return Err(invalid("channel name is empty")),
    }
    if channel.len() > 249 {
        return Err(invalid("longer than 249 characters"));
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-') {
        return Err(invalid("only lowercase letters, digits, '.' and '-' are allowed"));
    }
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}
