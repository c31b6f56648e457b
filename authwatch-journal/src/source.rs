//! Journal access behind a trait boundary.

use std::io;
use std::process::{Command, Stdio};
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::window::TimeWindow;

/// Errors from journal access.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The binary could not be invoked at all.
    #[error("failed to invoke {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The binary ran but reported failure.
    #[error("{command} exited with status {code}")]
    CommandFailed { command: String, code: i32 },
}

/// Trait for journal access.
///
/// `fetch` returns raw short-form lines in chronological order; `purge`
/// irreversibly rotates and vacuums the journal. Implementations must not
/// reorder or filter lines beyond what the underlying store does.
pub trait Journal: Send + Sync {
    fn fetch(&self, window: &TimeWindow) -> Result<Vec<String>, JournalError>;

    fn purge(&self) -> Result<(), JournalError>;
}

/// Real implementation shelling out to `journalctl`.
#[derive(Debug, Clone)]
pub struct JournalctlJournal {
    unit: String,
}

impl JournalctlJournal {
    /// Journal reader scoped to one systemd unit (e.g. "ssh.service").
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    fn run_silent(args: &[&str]) -> Result<(), JournalError> {
        let status = Command::new("journalctl")
            .args(args)
            .stdout(Stdio::null())
            .status()
            .map_err(|source| JournalError::Spawn {
                command: "journalctl".to_string(),
                source,
            })?;

        if !status.success() {
            return Err(JournalError::CommandFailed {
                command: format!("journalctl {}", args.join(" ")),
                code: status.code().unwrap_or(-1),
            });
        }

        Ok(())
    }
}

impl Journal for JournalctlJournal {
    fn fetch(&self, window: &TimeWindow) -> Result<Vec<String>, JournalError> {
        let mut cmd = Command::new("journalctl");
        cmd.arg("-u")
            .arg(&self.unit)
            .arg("--since")
            .arg(&window.since)
            .arg("--no-pager")
            .arg("--output=short");
        if let Some(until) = &window.until {
            cmd.arg("--until").arg(until);
        }

        let output = cmd.output().map_err(|source| JournalError::Spawn {
            command: "journalctl".to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(JournalError::CommandFailed {
                command: "journalctl".to_string(),
                code: output.status.code().unwrap_or(-1),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn purge(&self) -> Result<(), JournalError> {
        // Rotate active files out, then vacuum everything older than a
        // second. Order matters: vacuum only removes archived files.
        Self::run_silent(&["--rotate"])?;
        Self::run_silent(&["--vacuum-time=1s"])
    }
}

/// Mock journal for testing.
/// Cloning creates a new handle to the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct MockJournal {
    lines: Arc<RwLock<Vec<String>>>,
    windows_seen: Arc<RwLock<Vec<TimeWindow>>>,
    purge_count: Arc<RwLock<u32>>,
    fetch_failure: Arc<RwLock<Option<FetchFailure>>>,
    fail_purge: Arc<RwLock<bool>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchFailure {
    Spawn,
    Status(i32),
}

impl MockJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock journal pre-loaded with lines.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let journal = Self::new();
        *journal.lines.write().unwrap() = lines.into_iter().map(Into::into).collect();
        journal
    }

    /// Make `fetch` fail as if journalctl could not be spawned.
    pub fn fail_fetch_spawn(&self) {
        *self.fetch_failure.write().unwrap() = Some(FetchFailure::Spawn);
    }

    /// Make `fetch` fail as if journalctl exited with `code`.
    pub fn fail_fetch_status(&self, code: i32) {
        *self.fetch_failure.write().unwrap() = Some(FetchFailure::Status(code));
    }

    /// Make `purge` fail.
    pub fn fail_purge(&self) {
        *self.fail_purge.write().unwrap() = true;
    }

    /// Number of times `purge` ran to completion.
    pub fn purge_count(&self) -> u32 {
        *self.purge_count.read().unwrap()
    }

    /// Time windows passed to `fetch`.
    pub fn windows_seen(&self) -> Vec<TimeWindow> {
        self.windows_seen.read().unwrap().clone()
    }
}

impl Journal for MockJournal {
    fn fetch(&self, window: &TimeWindow) -> Result<Vec<String>, JournalError> {
        self.windows_seen.write().unwrap().push(window.clone());

        match *self.fetch_failure.read().unwrap() {
            Some(FetchFailure::Spawn) => Err(JournalError::Spawn {
                command: "journalctl".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "spawn disabled by test"),
            }),
            Some(FetchFailure::Status(code)) => Err(JournalError::CommandFailed {
                command: "journalctl".to_string(),
                code,
            }),
            None => Ok(self.lines.read().unwrap().clone()),
        }
    }

    fn purge(&self) -> Result<(), JournalError> {
        if *self.fail_purge.read().unwrap() {
            return Err(JournalError::CommandFailed {
                command: "journalctl --rotate".to_string(),
                code: 1,
            });
        }
        *self.purge_count.write().unwrap() += 1;
        Ok(())
    }
}
