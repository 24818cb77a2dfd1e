//! Connection metadata providers.
//!
//! A provider answers two questions during startup: where the wallet,
//! profile, and channel are (`load_config`), and how to produce a profile
//! when none exists yet (`generate`).

use std::path::Path;

use crate::config::{ConfigError, NetworkPaths};
use crate::profile::{ProfileError, ProfileTemplate};

pub trait MetadataProvider: Send + Sync {
    /// Resolve wallet path, profile path, and channel.
    fn load_config(&self) -> Result<NetworkPaths, ConfigError>;

    /// Write a fresh connection profile to `profile_path`.
    fn generate(&self, profile_path: &Path) -> Result<(), ProfileError>;
}

/// Reads everything from the process environment at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvMetadataProvider;

impl MetadataProvider for EnvMetadataProvider {
    fn load_config(&self) -> Result<NetworkPaths, ConfigError> {
        NetworkPaths::from_env()
    }

    fn generate(&self, profile_path: &Path) -> Result<(), ProfileError> {
        ProfileTemplate::from_env().generate(profile_path)
    }
}

/// Fixed configuration, for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticMetadataProvider {
    pub paths: NetworkPaths,
    pub template: ProfileTemplate,
}

impl MetadataProvider for StaticMetadataProvider {
    fn load_config(&self) -> Result<NetworkPaths, ConfigError> {
        Ok(self.paths.clone())
    }

    fn generate(&self, profile_path: &Path) -> Result<(), ProfileError> {
        self.template.generate(profile_path)
    }
}
