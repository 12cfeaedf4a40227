//! Core types for list cleanup

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-call configuration, resolved once before any field is processed.
///
/// The camelCase serde names match the options documents the mail-merge
/// tooling passes around, so `{"onlyReturnNames": true}` deserializes
/// directly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CleanupOptions {
    /// Strip display names; return bare normalized addresses
    pub only_return_emails: bool,

    /// Return display names instead of addresses; implies
    /// `add_display_names`
    pub only_return_names: bool,

    /// Synthesize a display name from the local part when a field
    /// carries none
    pub add_display_names: bool,

    /// Report rejected fields and candidates on the `tracing` channel
    pub log_garbage: bool,
}

impl CleanupOptions {
    /// Preset for address-only output
    #[must_use]
    pub const fn emails_only() -> Self {
        Self {
            only_return_emails: true,
            only_return_names: false,
            add_display_names: false,
            log_garbage: false,
        }
    }

    /// Preset for name-only output
    #[must_use]
    pub const fn names_only() -> Self {
        Self {
            only_return_emails: false,
            only_return_names: true,
            add_display_names: true,
            log_garbage: false,
        }
    }

    /// Parse a JSON options document
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Apply the one derivation rule and the one validity rule.
    ///
    /// `only_return_names` implies `add_display_names`; address-only and
    /// display-name output are mutually exclusive.
    pub(crate) fn resolved(self) -> Result<Self> {
        let mut resolved = self;
        if resolved.only_return_names {
            resolved.add_display_names = true;
        }
        if resolved.only_return_emails && resolved.add_display_names {
            return Err(crate::error::CleanupError::ConflictingOptions);
        }
        Ok(resolved)
    }
}

/// One cleaned entry: a normalized address with an optional display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailEntry {
    /// Display name (e.g., "John Doe"); case preserved
    pub name: Option<String>,

    /// Normalized address: lowercase, diacritics-free, grammar-valid
    pub address: String,
}

impl fmt::Display for EmailEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "\"{name}\" <{}>", self.address),
            None => write!(f, "{}", self.address),
        }
    }
}
