//! Per-run export document.
//!
//! Mirrors the run summary for machine (JSON) and human (text) consumption.
//! Unlike the aggregator, the export caps the error list at a fixed size
//! and records how many lines were dropped.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::aggregate::RunSummary;

/// Error lines retained in an export.
pub const EXPORT_ERROR_CAP: usize = 10;

/// Snapshot of one run's aggregates, ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub failed_attempts: BTreeMap<String, u64>,
    pub accepted_logins: BTreeMap<String, Vec<String>>,
    /// First `EXPORT_ERROR_CAP` error lines, log order.
    pub system_errors: Vec<String>,
    /// Error lines dropped by the cap.
    #[serde(default)]
    pub truncated_errors: usize,
}

impl ExportDocument {
    pub fn from_summary(summary: &RunSummary) -> Self {
        let system_errors: Vec<String> = summary
            .error_lines
            .iter()
            .take(EXPORT_ERROR_CAP)
            .cloned()
            .collect();
        let truncated_errors = summary.error_lines.len() - system_errors.len();

        Self {
            failed_attempts: summary.failed_attempts.clone(),
            accepted_logins: summary.accepted_logins.clone(),
            system_errors,
            truncated_errors,
        }
    }

    /// Serialize to pretty JSON.
    /// Cannot fail: the struct contains only strings, integers and maps.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("ExportDocument serialization cannot fail")
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sectioned plain-text rendering of the same content.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        writeln!(out, "FAILED LOGIN ATTEMPTS").expect("write to String");
        if self.failed_attempts.is_empty() {
            writeln!(out, "  none").expect("write to String");
        }
        for (address, count) in &self.failed_attempts {
            writeln!(out, "  {} {}", address, count).expect("write to String");
        }

        writeln!(out, "\nACCEPTED LOGINS").expect("write to String");
        if self.accepted_logins.is_empty() {
            writeln!(out, "  none").expect("write to String");
        }
        for (user, addresses) in &self.accepted_logins {
            writeln!(out, "  {} {}", user, addresses.join(" ")).expect("write to String");
        }

        writeln!(out, "\nSYSTEM ERRORS").expect("write to String");
        if self.system_errors.is_empty() {
            writeln!(out, "  none").expect("write to String");
        }
        for err in &self.system_errors {
            writeln!(out, "  {}", err).expect("write to String");
        }
        if self.truncated_errors > 0 {
            writeln!(out, "  ({} lines truncated)", self.truncated_errors)
                .expect("write to String");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::classify::Classifier;
    use std::collections::BTreeSet;

    fn summary_of(lines: &[&str]) -> RunSummary {
        aggregate(&Classifier::new(), lines)
    }

    // ===========================================
    // Document construction
    // ===========================================

    #[test]
    fn test_mirrors_failed_and_accepted() {
        let summary = summary_of(&[
            "sshd[9]: Failed password for root from 10.0.0.1 port 22 ssh2",
            "sshd[9]: Accepted password for alice from 10.0.0.2 port 22 ssh2",
        ]);

        let doc = ExportDocument::from_summary(&summary);

        assert_eq!(doc.failed_attempts, summary.failed_attempts);
        assert_eq!(doc.accepted_logins, summary.accepted_logins);
        assert_eq!(doc.truncated_errors, 0);
    }

    #[test]
    fn test_errors_capped_at_export_limit() {
        let lines: Vec<String> = (0..15).map(|i| format!("kernel: warning {}", i)).collect();
        let summary = aggregate(&Classifier::new(), &lines);

        let doc = ExportDocument::from_summary(&summary);

        assert_eq!(doc.system_errors.len(), EXPORT_ERROR_CAP);
        assert_eq!(doc.truncated_errors, 5);
        assert_eq!(doc.system_errors[0], "kernel: warning 0");
        assert_eq!(doc.system_errors[9], "kernel: warning 9");
    }

    #[test]
    fn test_no_truncation_below_cap() {
        let summary = summary_of(&["kernel: oom-killer invoked"]);

        let doc = ExportDocument::from_summary(&summary);

        assert_eq!(doc.system_errors.len(), 1);
        assert_eq!(doc.truncated_errors, 0);
    }

    // ===========================================
    // JSON round-trip
    // ===========================================

    #[test]
    fn test_json_roundtrip_reproduces_counts_and_sets() {
        let summary = summary_of(&[
            "sshd[9]: Failed password for root from 10.0.0.1 port 22 ssh2",
            "sshd[9]: Failed password for root from 10.0.0.1 port 22 ssh2",
            "sshd[9]: Failed password for root from 10.0.0.3 port 22 ssh2",
            "sshd[9]: Accepted password for alice from 10.0.0.1 port 22 ssh2",
            "sshd[9]: Accepted password for alice from 10.0.0.2 port 22 ssh2",
            "sshd[9]: Accepted password for alice from 10.0.0.2 port 22 ssh2",
        ]);
        let doc = ExportDocument::from_summary(&summary);

        let restored = ExportDocument::from_json(&doc.to_json()).expect("parse");

        assert_eq!(restored.failed_attempts, summary.failed_attempts);
        // Distinct-address sets must match; sequence order is not part of
        // the contract.
        for (user, addresses) in &summary.accepted_logins {
            let expected: BTreeSet<&String> = addresses.iter().collect();
            let actual: BTreeSet<&String> = restored
                .accepted_logins
                .get(user)
                .expect("user present")
                .iter()
                .collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_json_roundtrip_empty_document() {
        let doc = ExportDocument::from_summary(&RunSummary::default());
        let restored = ExportDocument::from_json(&doc.to_json()).expect("parse");
        assert_eq!(doc, restored);
    }

    // ===========================================
    // Text rendering
    // ===========================================

    #[test]
    fn test_text_has_all_sections() {
        let doc = ExportDocument::from_summary(&RunSummary::default());
        let text = doc.to_text();

        assert!(text.contains("FAILED LOGIN ATTEMPTS"));
        assert!(text.contains("ACCEPTED LOGINS"));
        assert!(text.contains("SYSTEM ERRORS"));
        assert_eq!(text.matches("none").count(), 3);
    }

    #[test]
    fn test_text_lists_entries() {
        let summary = summary_of(&[
            "sshd[9]: Failed password for root from 10.0.0.1 port 22 ssh2",
            "sshd[9]: Accepted password for alice from 10.0.0.2 port 22 ssh2",
        ]);
        let text = ExportDocument::from_summary(&summary).to_text();

        assert!(text.contains("10.0.0.1 1"));
        assert!(text.contains("alice 10.0.0.2"));
    }

    #[test]
    fn test_text_notes_truncation() {
        let lines: Vec<String> = (0..12).map(|i| format!("kernel: warning {}", i)).collect();
        let summary = aggregate(&Classifier::new(), &lines);
        let text = ExportDocument::from_summary(&summary).to_text();

        assert!(text.contains("(2 lines truncated)"));
    }
}
