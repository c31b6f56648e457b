//! systemd journal collaborator for authwatch.
//!
//! This crate owns every interaction with `journalctl`:
//! - fetching raw short-form log lines for a time window
//! - the irreversible rotate + vacuum purge
//!
//! Both sit behind the `Journal` trait so the pipeline can run against a
//! `MockJournal` in tests.

mod source;
mod window;

pub use source::{Journal, JournalError, JournalctlJournal, MockJournal};
pub use window::{TimeWindow, DEFAULT_SINCE};
