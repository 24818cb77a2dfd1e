//! # Connection Profiles
//!
//! A connection profile tells the session layer where the ledger gateway
//! lives and how to trust it. Profiles are YAML by default; a `.json`
//! extension selects JSON.
//!
//! ```yaml
//! name: evidence-network
//! version: "1.0"
//! organization:
//!   mspId: Org1MSP
//! gateway:
//!   url: https://gateway.org1.example.com:7443
//!   tlsCACertPath: /etc/evidence/tls/ca.pem
//! peers:
//!   - name: peer0.org1.example.com
//!     url: grpcs://peer0.org1.example.com:7051
//! ```
//!
//! Profiles can be generated from a [`ProfileTemplate`]. The template is a
//! deliberately small bootstrap: one gateway endpoint, one organization.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

/// Default gateway endpoint written into generated profiles.
pub const DEFAULT_GATEWAY_URL: &str = "https://localhost:7443";
/// Default MSP written into generated profiles.
pub const DEFAULT_MSP_ID: &str = "Org1MSP";

/// Parsed connection profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProfile {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub organization: OrganizationSection,
    pub gateway: GatewaySection,
    /// Peers known to the organization. Informational; calls go through the
    /// gateway.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub peers: Vec<PeerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSection {
    pub msp_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewaySection {
    pub url: Url,
    /// PEM bundle used as the only trust root for the gateway's TLS
    /// certificate. System roots are used when absent.
    #[serde(
        default,
        rename = "tlsCACertPath",
        skip_serializing_if = "Option::is_none"
    )]
    pub tls_ca_cert_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerEntry {
    pub name: String,
    pub url: String,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl ConnectionProfile {
    /// Read and parse a profile from disk.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = if is_json(path) {
            serde_json::from_str(&raw).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&raw).map_err(|e| e.to_string())
        };
        parsed.map_err(|reason| ProfileError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Serialize and write the profile, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<(), ProfileError> {
        let rendered = if is_json(path) {
            serde_json::to_string_pretty(self).map_err(|e| e.to_string())
        } else {
            serde_yaml::to_string(self).map_err(|e| e.to_string())
        }
        .map_err(|reason| ProfileError::Render { reason })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ProfileError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, rendered).map_err(|source| ProfileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Inputs for generating a minimal profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTemplate {
    pub network_name: String,
    pub gateway_url: String,
    pub tls_ca_cert_path: Option<PathBuf>,
    pub msp_id: String,
}

impl Default for ProfileTemplate {
    fn default() -> Self {
        Self {
            network_name: "evidence-network".to_string(),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            tls_ca_cert_path: None,
            msp_id: DEFAULT_MSP_ID.to_string(),
        }
    }
}

impl ProfileTemplate {
    /// Load template inputs from environment variables.
    ///
    /// Variables:
    /// - `LEDGER_GATEWAY_URL` (default: `https://localhost:7443`)
    /// - `LEDGER_TLS_CA_CERT` (optional)
    /// - `LEDGER_MSP_ID` (default: `Org1MSP`)
    pub fn from_env() -> Self {
        Self {
            gateway_url: crate::config::env_or("LEDGER_GATEWAY_URL", DEFAULT_GATEWAY_URL),
            tls_ca_cert_path: std::env::var("LEDGER_TLS_CA_CERT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            msp_id: crate::config::env_or("LEDGER_MSP_ID", DEFAULT_MSP_ID),
            ..Self::default()
        }
    }

    /// Render the template into a profile.
    pub fn render(&self) -> Result<ConnectionProfile, ProfileError> {
        let url = Url::parse(&self.gateway_url).map_err(|e| ProfileError::Render {
            reason: format!("invalid gateway URL {:?}: {e}", self.gateway_url),
        })?;
        Ok(ConnectionProfile {
            name: self.network_name.clone(),
            version: default_version(),
            organization: OrganizationSection {
                msp_id: self.msp_id.clone(),
            },
            gateway: GatewaySection {
                url,
                tls_ca_cert_path: self.tls_ca_cert_path.clone(),
            },
            peers: Vec::new(),
        })
    }

    /// Render the template and write it to `path`.
    pub fn generate(&self, path: &Path) -> Result<(), ProfileError> {
        let profile = self.render()?;
        profile.write(path)?;
        tracing::info!(path = %path.display(), gateway = %profile.gateway.url, "connection profile generated");
        Ok(())
    }
}

/// Connection profile errors.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to read connection profile {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse connection profile {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("failed to render connection profile: {reason}")]
    Render { reason: String },
    #[error("failed to write connection profile {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
