//! # Gateway, Network, and Contract Interfaces
//!
//! The ledger is reached through three nested handles, mirroring how the
//! ledger's own client SDKs are shaped:
//!
//! ```text
//! GatewayConnector::connect(profile, identity) -> Gateway
//! Gateway::network(channel)                    -> Network
//! Network::contract(name)                      -> Contract
//! Contract::submit / Contract::evaluate        -> bytes
//! ```
//!
//! `submit` sends a transaction for endorsement and ordering and waits for
//! it to commit. `evaluate` queries a single peer and never changes ledger
//! state.
//!
//! All handles are `Send + Sync` and shared behind `Arc`; implementations
//! must tolerate concurrent `submit`/`evaluate` calls on the same contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::LedgerError;
use crate::identity::ResolvedIdentity;
use crate::profile::ConnectionProfile;

/// A deployed contract on one channel.
#[async_trait]
pub trait Contract: Send + Sync {
    /// Contract name as deployed.
    fn name(&self) -> &str;

    /// Submit a state-changing transaction and wait for commit.
    async fn submit(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError>;

    /// Evaluate a read-only query.
    async fn evaluate(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError>;
}

/// A channel the connected identity is a member of.
pub trait Network: Send + Sync {
    /// Channel name.
    fn channel(&self) -> &str;

    /// Bind a contract by name. Binding does not contact the network.
    fn contract(&self, name: &str) -> Arc<dyn Contract>;
}

/// A connected, authenticated gateway.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Resolve a channel, failing when it is unknown or the identity is not
    /// a member.
    async fn network(&self, channel: &str) -> Result<Arc<dyn Network>, LedgerError>;
}

/// Builds gateways from a connection profile and an identity.
#[async_trait]
pub trait GatewayConnector: Send + Sync {
    async fn connect(
        &self,
        profile: &ConnectionProfile,
        identity: &ResolvedIdentity,
    ) -> Result<Arc<dyn Gateway>, LedgerError>;
}
