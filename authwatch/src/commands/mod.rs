//! Command orchestration.
//!
//! Two entry points: `execute_report` (fetch, classify, merge, persist,
//! export) and `execute_reset` (confirmed destructive purge). Both take
//! their collaborators as parameters so tests can run them against mocks.

pub mod report;
pub mod reset;

pub use report::{execute_report, ReportResult};
pub use reset::{execute_reset, ResetResult, PURGE_PROMPT};

use authwatch_journal::JournalError;
use thiserror::Error;

use crate::cli::CliError;

/// Errors that abort a command.
///
/// Everything else in the pipeline (missing state, failed exports, a
/// journal query that ran but failed) degrades to a warning and the run
/// continues with best-effort output.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CliError),

    #[error("journal error: {0}")]
    Journal(#[from] JournalError),
}

/// Result of command execution.
pub type CommandResult<T> = Result<T, CommandError>;
