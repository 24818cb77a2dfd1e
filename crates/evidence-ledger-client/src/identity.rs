//! Identity resolution.
//!
//! Confirms that the configured submitting identity has a usable credential
//! before any network connection is attempted. A missing identity cannot be
//! fixed by retrying: it needs an enrollment run out of band.

use evidence_core::IdentityLabel;

use crate::wallet::{Credential, CredentialStore};

/// An identity whose credential was found and loaded.
#[derive(Debug, Clone)]
pub struct ResolvedIdentity {
    pub label: IdentityLabel,
    pub credential: Credential,
}

/// Look up `label` in `store`.
pub fn resolve_identity(
    label: &IdentityLabel,
    store: &dyn CredentialStore,
) -> Result<ResolvedIdentity, IdentityError> {
    if !store.exists(label.as_str()) {
        return Err(IdentityError::NotFound {
            label: label.clone(),
        });
    }
    let credential = store
        .get(label.as_str())
        .map_err(|e| IdentityError::Unusable {
            label: label.clone(),
            reason: e.to_string(),
        })?;
    tracing::debug!(identity = %label, msp_id = %credential.msp_id, "identity resolved");
    Ok(ResolvedIdentity {
        label: label.clone(),
        credential,
    })
}

/// Identity resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity {label} not found in wallet, run setup script first")]
    NotFound { label: IdentityLabel },
    #[error("identity {label} is present in wallet but unusable: {reason}")]
    Unusable { label: IdentityLabel, reason: String },
}
