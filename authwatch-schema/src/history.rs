//! Persisted history snapshot for authwatch.
//!
//! A single JSON document holding the cumulative view across runs:
//! failed-login counts per source address and the set of addresses each
//! account has logged in from. Counts only grow; address sets only gain
//! members. Everything else the tool computes is per-run and transient.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Cumulative cross-run snapshot.
///
/// Sorted maps keep the serialized document deterministic, so re-saving an
/// unchanged history produces byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    /// Source address -> cumulative failed-password count.
    #[serde(default)]
    pub failed_logins: BTreeMap<String, u64>,

    /// Username -> every source address ever seen for an accepted login.
    #[serde(default)]
    pub suspicious_logins: BTreeMap<String, BTreeSet<String>>,
}

impl History {
    /// An empty history, equivalent to a missing state file.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.failed_logins.is_empty() && self.suspicious_logins.is_empty()
    }

    /// Serialize to pretty JSON.
    /// Cannot fail: the struct contains only strings, integers and maps.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("History serialization cannot fail")
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Cumulative failed attempts across all addresses.
    pub fn total_failed(&self) -> u64 {
        self.failed_logins.values().sum()
    }
}

/// Errors from decoding a history document.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
