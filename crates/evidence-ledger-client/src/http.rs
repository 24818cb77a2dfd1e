//! # HTTP Gateway Client
//!
//! [`GatewayConnector`] implementation for ledger gateways that expose
//! contract calls over HTTPS.
//!
//! ## Live API Paths
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/v1/channels/{channel}` | Channel membership probe |
//! | POST   | `/api/v1/channels/{channel}/contracts/{contract}/submit` | Submit transaction |
//! | POST   | `/api/v1/channels/{channel}/contracts/{contract}/evaluate` | Evaluate query |
//!
//! Contract calls send `{"function": "...", "args": ["...", ...]}`. A 2xx
//! response body is the contract's raw result. Any other status is an error
//! whose message is the gateway's error text, unmodified, or the status
//! reason when the gateway sent no text.
//!
//! ## Authentication
//!
//! Over `https` the client presents the wallet identity's certificate and
//! key as its TLS client identity, and trusts only the profile's CA bundle
//! when one is configured. Every request also carries the identity label and
//! MSP in `x-ledger-identity` / `x-ledger-msp-id` headers.
//!
//! ## Timeout & Retry
//!
//! Only connection establishment is bounded (`connect_timeout`). A
//! submission may legitimately wait for block commit, so no total request
//! timeout is applied. Nothing here retries: a failed submit has an unknown
//! outcome, and resending it could register the same evidence twice.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::error::LedgerError;
use crate::gateway::{Contract, Gateway, GatewayConnector, Network};
use crate::identity::ResolvedIdentity;
use crate::profile::ConnectionProfile;

/// Default bound on establishing a TCP/TLS connection to the gateway.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connects to HTTP ledger gateways.
#[derive(Debug, Clone)]
pub struct HttpGatewayConnector {
    connect_timeout: Duration,
}

impl Default for HttpGatewayConnector {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl HttpGatewayConnector {
    fn build_client(
        &self,
        profile: &ConnectionProfile,
        identity: &ResolvedIdentity,
    ) -> Result<reqwest::Client, LedgerError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "x-ledger-identity",
            reqwest::header::HeaderValue::from_str(identity.label.as_str())
                .map_err(|_| LedgerError::Client("identity label is not a valid header".into()))?,
        );
        headers.insert(
            "x-ledger-msp-id",
            reqwest::header::HeaderValue::from_str(&identity.credential.msp_id)
                .map_err(|_| LedgerError::Client("MSP id is not a valid header".into()))?,
        );

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(self.connect_timeout)
            .default_headers(headers);

        if let Some(ca_path) = &profile.gateway.tls_ca_cert_path {
            let pem = std::fs::read(ca_path).map_err(|e| {
                LedgerError::Client(format!(
                    "failed to read gateway CA bundle {}: {e}",
                    ca_path.display()
                ))
            })?;
            let ca = reqwest::Certificate::from_pem(&pem)
                .map_err(|e| LedgerError::Client(format!("invalid gateway CA bundle: {e}")))?;
            builder = builder.add_root_certificate(ca);
        }

        if profile.gateway.url.scheme() == "https" {
            let pem = zeroize::Zeroizing::new(format!(
                "{}\n{}",
                identity.credential.certificate,
                identity.credential.private_key.as_str()
            ));
            let tls_identity = reqwest::Identity::from_pem(pem.as_bytes()).map_err(|e| {
                LedgerError::Client(format!(
                    "identity {} has unusable TLS material: {e}",
                    identity.label
                ))
            })?;
            builder = builder.identity(tls_identity);
        }

        builder
            .build()
            .map_err(|e| LedgerError::Client(format!("failed to build HTTP client: {e}")))
    }
}

#[async_trait]
impl GatewayConnector for HttpGatewayConnector {
    async fn connect(
        &self,
        profile: &ConnectionProfile,
        identity: &ResolvedIdentity,
    ) -> Result<Arc<dyn Gateway>, LedgerError> {
        let http = self.build_client(profile, identity)?;
        tracing::info!(gateway = %profile.gateway.url, identity = %identity.label, "gateway client ready");
        Ok(Arc::new(HttpGateway {
            http,
            base_url: profile.gateway.url.clone(),
        }))
    }
}

/// Gateway reached over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: Url,
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn network(&self, channel: &str) -> Result<Arc<dyn Network>, LedgerError> {
        let endpoint = format!("GET /channels/{channel}");
        let url = endpoint_url(&self.base_url, &["channels", channel])?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| LedgerError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        read_body(&endpoint, resp).await?;

        Ok(Arc::new(HttpNetwork {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            channel: channel.to_string(),
        }))
    }
}

#[derive(Debug, Clone)]
struct HttpNetwork {
    http: reqwest::Client,
    base_url: Url,
    channel: String,
}

impl Network for HttpNetwork {
    fn channel(&self) -> &str {
        &self.channel
    }

    fn contract(&self, name: &str) -> Arc<dyn Contract> {
        Arc::new(HttpContract {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            channel: self.channel.clone(),
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
struct HttpContract {
    http: reqwest::Client,
    base_url: Url,
    channel: String,
    name: String,
}

#[derive(Serialize)]
struct ContractCall<'a> {
    function: &'a str,
    args: &'a [&'a str],
}

impl HttpContract {
    async fn call(&self, mode: &str, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        let endpoint = format!("{mode} {}:{function}", self.name);
        let url = endpoint_url(
            &self.base_url,
            &["channels", &self.channel, "contracts", &self.name, mode],
        )?;

        let resp = self
            .http
            .post(url)
            .json(&ContractCall { function, args })
            .send()
            .await
            .map_err(|source| LedgerError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        read_body(&endpoint, resp).await
    }
}

#[async_trait]
impl Contract for HttpContract {
    fn name(&self) -> &str {
        &self.name
    }

    async fn submit(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        self.call("submit", function, args).await
    }

    async fn evaluate(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        self.call("evaluate", function, args).await
    }
}

fn endpoint_url(base: &Url, tail: &[&str]) -> Result<Url, LedgerError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LedgerError::Client(format!("gateway URL {base} cannot carry a path")))?
        .pop_if_empty()
        .extend(["api", "v1"])
        .extend(tail);
    Ok(url)
}

async fn read_body(endpoint: &str, resp: reqwest::Response) -> Result<Vec<u8>, LedgerError> {
    let status = resp.status();
    let body = resp.bytes().await.map_err(|source| LedgerError::Transport {
        endpoint: endpoint.to_string(),
        source,
    })?;
    if !status.is_success() {
        return Err(LedgerError::Rejected {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: rejection_message(status, &body),
        });
    }
    Ok(body.to_vec())
}

/// The gateway's error text, or the status reason when the body is empty.
fn rejection_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    let message = error_message(body);
    if !message.is_empty() {
        return message;
    }
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => format!("gateway returned status {}", status.as_u16()),
    }
}

/// Gateways wrap contract errors as `{"error": "..."}` or
/// `{"message": "..."}`; anything else is passed through as text.
fn error_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    String::from_utf8_lossy(body).trim().to_string()
}
