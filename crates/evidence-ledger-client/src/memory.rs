//! # In-Memory Ledger
//!
//! A process-local stand-in for the ledger network. It implements every
//! gateway interface, records each contract call, and answers with scripted
//! responses, so the session layer and the API can be exercised without a
//! network.
//!
//! Unscripted functions succeed with an empty payload.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::LedgerError;
use crate::gateway::{Contract, Gateway, GatewayConnector, Network};
use crate::identity::ResolvedIdentity;
use crate::profile::ConnectionProfile;

/// Whether a recorded call was a submission or an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    Submit,
    Evaluate,
}

/// One contract call as seen by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub mode: CallMode,
    pub contract: String,
    pub function: String,
    pub args: Vec<String>,
}

#[derive(Default)]
struct Inner {
    channels: Mutex<Vec<String>>,
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<HashMap<String, Result<Vec<u8>, String>>>,
    connected_as: Mutex<Option<String>>,
    latency: Mutex<Option<Duration>>,
}

/// Scriptable in-memory ledger. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryLedger {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for InMemoryLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryLedger")
            .field("channels", &*self.inner.channels.lock())
            .field("calls", &self.inner.calls.lock().len())
            .finish()
    }
}

impl InMemoryLedger {
    /// A ledger with a single joinable channel.
    pub fn new(channel: &str) -> Self {
        let ledger = Self::default();
        ledger.inner.channels.lock().push(channel.to_string());
        ledger
    }

    /// Answer `function` with `payload` from now on.
    pub fn respond_ok(&self, function: &str, payload: impl Into<Vec<u8>>) {
        self.inner
            .responses
            .lock()
            .insert(function.to_string(), Ok(payload.into()));
    }

    /// Fail `function` with `message` from now on.
    pub fn respond_err(&self, function: &str, message: &str) {
        self.inner
            .responses
            .lock()
            .insert(function.to_string(), Err(message.to_string()));
    }

    /// Delay every contract call, to model a slow commit.
    pub fn set_latency(&self, latency: Duration) {
        *self.inner.latency.lock() = Some(latency);
    }

    /// Every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.lock().clone()
    }

    /// Number of calls made with the given mode.
    pub fn count(&self, mode: CallMode) -> usize {
        self.inner
            .calls
            .lock()
            .iter()
            .filter(|c| c.mode == mode)
            .count()
    }

    /// Identity label of the last `connect`, if any.
    pub fn connected_as(&self) -> Option<String> {
        self.inner.connected_as.lock().clone()
    }

    async fn invoke(
        &self,
        mode: CallMode,
        contract: &str,
        function: &str,
        args: &[&str],
    ) -> Result<Vec<u8>, LedgerError> {
        self.inner.calls.lock().push(RecordedCall {
            mode,
            contract: contract.to_string(),
            function: function.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });

        let latency = *self.inner.latency.lock();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let scripted = self.inner.responses.lock().get(function).cloned();
        match scripted {
            Some(Ok(payload)) => Ok(payload),
            Some(Err(message)) => Err(LedgerError::Contract(message)),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl GatewayConnector for InMemoryLedger {
    async fn connect(
        &self,
        _profile: &ConnectionProfile,
        identity: &ResolvedIdentity,
    ) -> Result<Arc<dyn Gateway>, LedgerError> {
        *self.inner.connected_as.lock() = Some(identity.label.to_string());
        Ok(Arc::new(self.clone()))
    }
}

#[async_trait]
impl Gateway for InMemoryLedger {
    async fn network(&self, channel: &str) -> Result<Arc<dyn Network>, LedgerError> {
        if !self.inner.channels.lock().iter().any(|c| c == channel) {
            return Err(LedgerError::Contract(format!(
                "channel {channel} not found or identity is not a member"
            )));
        }
        Ok(Arc::new(InMemoryNetwork {
            ledger: self.clone(),
            channel: channel.to_string(),
        }))
    }
}

struct InMemoryNetwork {
    ledger: InMemoryLedger,
    channel: String,
}

impl Network for InMemoryNetwork {
    fn channel(&self) -> &str {
        &self.channel
    }

    fn contract(&self, name: &str) -> Arc<dyn Contract> {
        Arc::new(InMemoryContract {
            ledger: self.ledger.clone(),
            name: name.to_string(),
        })
    }
}

/// Contract handle bound to an [`InMemoryLedger`].
#[derive(Debug, Clone)]
pub struct InMemoryContract {
    ledger: InMemoryLedger,
    name: String,
}

impl InMemoryContract {
    /// Bind a contract directly, skipping connect and channel resolution.
    pub fn new(ledger: &InMemoryLedger, name: &str) -> Self {
        Self {
            ledger: ledger.clone(),
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl Contract for InMemoryContract {
    fn name(&self) -> &str {
        &self.name
    }

    async fn submit(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        self.ledger
            .invoke(CallMode::Submit, &self.name, function, args)
            .await
    }

    async fn evaluate(&self, function: &str, args: &[&str]) -> Result<Vec<u8>, LedgerError> {
        self.ledger
            .invoke(CallMode::Evaluate, &self.name, function, args)
            .await
    }
}
