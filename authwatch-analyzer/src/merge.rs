//! History merging.
//!
//! Combines one run's summary with the persisted cross-run history and
//! produces a new owned snapshot. Counts only grow and address sets only
//! gain members; merging the identical run twice double-counts, which is
//! accepted behavior.

use authwatch_schema::History;

use crate::aggregate::RunSummary;

/// Merge a run into the prior history.
///
/// Borrows both inputs read-only and returns a new owned snapshot.
pub fn merge(prior: &History, summary: &RunSummary) -> History {
    let mut merged = prior.clone();

    for (address, count) in &summary.failed_attempts {
        *merged.failed_logins.entry(address.clone()).or_insert(0) += count;
    }

    for (user, addresses) in &summary.accepted_logins {
        let set = merged.suspicious_logins.entry(user.clone()).or_default();
        for address in addresses {
            set.insert(address.clone());
        }
    }

    merged
}
