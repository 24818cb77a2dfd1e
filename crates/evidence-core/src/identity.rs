//! # Submitting Identity Label
//!
//! The label under which the submitting identity's credential is stored in
//! the wallet. An unset or blank label resolves to [`IdentityLabel::DEFAULT`].

use serde::{Deserialize, Serialize};

/// Label of the identity that signs ledger transactions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityLabel(String);

impl IdentityLabel {
    /// Label used when none is configured.
    pub const DEFAULT: &'static str = "appUser";

    /// Build a label, falling back to [`Self::DEFAULT`] when `raw` is empty
    /// or whitespace.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Self(Self::DEFAULT.to_string())
        } else {
            Self(raw)
        }
    }

    /// Build a label from an optional configured value.
    pub fn from_option(raw: Option<String>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }

    /// Borrow the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IdentityLabel {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for IdentityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_defaults() {
        assert_eq!(IdentityLabel::new("").as_str(), "appUser");
        assert_eq!(IdentityLabel::new("   ").as_str(), "appUser");
    }

    #[test]
    fn unset_label_defaults() {
        assert_eq!(IdentityLabel::from_option(None).as_str(), "appUser");
    }

    #[test]
    fn configured_label_is_kept_verbatim() {
        let label = IdentityLabel::from_option(Some("auditor1".into()));
        assert_eq!(label.as_str(), "auditor1");
        assert_eq!(label.to_string(), "auditor1");
    }
}
