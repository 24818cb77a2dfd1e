//! # evidence-ledger-client -- Ledger session layer
//!
//! Everything the gateway needs to talk to the permissioned ledger:
//!
//! - **Identity**: wallet-backed credential lookup ([`wallet`], [`identity`])
//! - **Connection metadata**: profile loading and generation ([`profile`],
//!   [`metadata`], [`config`])
//! - **Gateway interfaces**: connect / network / contract ([`gateway`]) with
//!   an HTTP implementation ([`http`]) and an in-memory one ([`memory`])
//! - **Session**: the one-time establishment sequence and the long-lived
//!   submit/evaluate handle ([`session`])
//!
//! ## Architecture
//!
//! This crate is the ONLY path by which the gateway reaches the ledger.
//! Evidence state is owned by the ledger; nothing here caches or stores it.
//!
//! ## Delivery Semantics
//!
//! Submissions are at-most-once. A transport failure during `submit` leaves
//! the transaction's fate unknown, and the error is returned as-is rather
//! than retried. Safe retries would need idempotency keys understood by the
//! contract.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod identity;
pub mod memory;
pub mod metadata;
pub mod profile;
pub mod session;
pub mod wallet;

pub use config::{ConfigError, NetworkPaths};
pub use error::LedgerError;
pub use gateway::{Contract, Gateway, GatewayConnector, Network};
pub use http::HttpGatewayConnector;
pub use identity::{IdentityError, ResolvedIdentity};
pub use memory::InMemoryLedger;
pub use metadata::{EnvMetadataProvider, MetadataProvider, StaticMetadataProvider};
pub use profile::{ConnectionProfile, ProfileError, ProfileTemplate};
pub use session::{establish, Session, SessionError, SessionOptions};
pub use wallet::{Credential, CredentialStore, FileSystemWallet, WalletError};
