//! Mitigation recommendations.
//!
//! Turns a run summary into concrete block commands for offending
//! addresses plus advisory notes for the operator.

use serde::Serialize;

use crate::aggregate::RunSummary;

/// A mitigation command for one offending source address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub address: String,
    pub attempts: u64,
    pub command: String,
}

/// One block command per address with failed attempts, worst offender
/// first (ties broken by address).
pub fn block_commands(summary: &RunSummary) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = summary
        .failed_attempts
        .iter()
        .map(|(address, &attempts)| Recommendation {
            address: address.clone(),
            attempts,
            command: format!("fail2ban-client set sshd banip {}", address),
        })
        .collect();

    recs.sort_by(|a, b| b.attempts.cmp(&a.attempts).then_with(|| a.address.cmp(&b.address)));
    recs
}

/// Advisory notes for findings that have no single-command mitigation.
pub fn advisory_notes(summary: &RunSummary) -> Vec<String> {
    let mut notes = Vec::new();

    if !summary.failed_attempts.is_empty() {
        notes.push(
            "consider banning addresses with failed login attempts (fail2ban)".to_string(),
        );
    }
    if !summary.suspicious_users().is_empty() {
        notes.push("review accounts logging in from multiple addresses".to_string());
    }
    if !summary.error_lines.is_empty() {
        notes.push("investigate system errors and kernel warnings".to_string());
    }
    if notes.is_empty() {
        notes.push("system appears clean".to_string());
    }

    notes
}
