//! CLI argument parsing for authwatch.
//!
//! A flat flag surface: one invocation analyzes a time window and reports;
//! `--reset` short-circuits everything and purges the journal instead.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

/// Fixed relative path of the history snapshot.
pub const DEFAULT_STATE_PATH: &str = "authwatch-history.json";

/// systemd unit whose journal is analyzed by default.
pub const DEFAULT_UNIT: &str = "ssh.service";

/// Errors from CLI argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("--unit must not be empty")]
    EmptyUnit,

    #[error("--{flag} must not be an empty time expression")]
    EmptyTimeExpression { flag: &'static str },
}

/// authwatch - classify sshd journal records into security findings.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "authwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Permanently purge the journal (rotate + vacuum). Skips all reporting.
    #[arg(short = 'r', long)]
    pub reset: bool,

    /// Window start, a free-form journalctl time expression.
    /// Defaults to "1 hour ago".
    #[arg(long)]
    pub since: Option<String>,

    /// Window end, a free-form journalctl time expression.
    #[arg(long)]
    pub until: Option<String>,

    /// Export the run summary to this path (.json or .txt).
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Print mitigation commands for offending addresses.
    #[arg(long)]
    pub recommend: bool,

    /// Path of the cumulative history snapshot.
    #[arg(long, default_value = DEFAULT_STATE_PATH)]
    pub state: PathBuf,

    /// systemd unit whose journal is analyzed.
    #[arg(short, long, default_value = DEFAULT_UNIT)]
    pub unit: String,

    /// Increase verbosity (-v verbose, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validate the arguments.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.unit.trim().is_empty() {
            return Err(CliError::EmptyUnit);
        }
        if matches!(&self.since, Some(s) if s.trim().is_empty()) {
            return Err(CliError::EmptyTimeExpression { flag: "since" });
        }
        if matches!(&self.until, Some(u) if u.trim().is_empty()) {
            return Err(CliError::EmptyTimeExpression { flag: "until" });
        }
        Ok(())
    }

    /// The journal query window these arguments describe.
    pub fn window(&self) -> authwatch_journal::TimeWindow {
        authwatch_journal::TimeWindow::new(self.since.clone(), self.until.clone())
    }
}

/// Parse CLI arguments from an iterator of strings.
/// Useful for testing.
pub fn parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
