//! Per-run aggregation.
//!
//! Folds a sequence of raw lines through the classifier into three summary
//! structures. Purely functional over its input: no I/O, no global state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::classify::{Classifier, LineClass};

/// Aggregated view of one run's journal lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Source address -> failed-password count for this run.
    /// Invariant: every present key has count >= 1.
    pub failed_attempts: BTreeMap<String, u64>,

    /// Username -> source addresses of accepted logins, in observation
    /// order, duplicates preserved.
    pub accepted_logins: BTreeMap<String, Vec<String>>,

    /// Error / kernel-warning lines in log order. Never truncated here;
    /// reporters apply their own caps.
    pub error_lines: Vec<String>,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.failed_attempts.is_empty()
            && self.accepted_logins.is_empty()
            && self.error_lines.is_empty()
    }

    /// Fold one classification into the summary.
    pub fn record(&mut self, class: LineClass) {
        match class {
            LineClass::FailedPassword { address } => {
                *self.failed_attempts.entry(address).or_insert(0) += 1;
            }
            LineClass::AcceptedPassword { user, address } => {
                self.accepted_logins.entry(user).or_default().push(address);
            }
            LineClass::SystemError { message } => {
                self.error_lines.push(message);
            }
            LineClass::Unclassified => {}
        }
    }

    /// Distinct source addresses observed for a user this run.
    pub fn distinct_addresses(&self, user: &str) -> BTreeSet<&str> {
        self.accepted_logins
            .get(user)
            .map(|addrs| addrs.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Users that logged in from two or more distinct addresses, with
    /// their distinct address sets.
    pub fn suspicious_users(&self) -> Vec<(&str, BTreeSet<&str>)> {
        self.accepted_logins
            .keys()
            .map(|user| (user.as_str(), self.distinct_addresses(user)))
            .filter(|(_, addrs)| addrs.len() >= 2)
            .collect()
    }
}

/// Classify and fold a sequence of raw lines, in input order.
pub fn aggregate<I, S>(classifier: &Classifier, lines: I) -> RunSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = RunSummary::default();
    for line in lines {
        summary.record(classifier.classify(line.as_ref()));
    }
    summary
}
