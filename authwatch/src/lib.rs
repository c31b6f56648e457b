//! authwatch CLI.
//!
//! Wires the analysis engine to its collaborators: the systemd journal,
//! the filesystem-backed history snapshot, export writers, and the
//! interactive confirmation gate for the destructive reset.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod io;
pub mod logger;

pub use cli::{parse_from, Cli, CliError, DEFAULT_STATE_PATH, DEFAULT_UNIT};
pub use commands::{execute_report, execute_reset, CommandError, ReportResult, ResetResult};
pub use io::confirm::{Confirmer, DenyAll, ScriptedConfirmer, StdinConfirmer};
pub use io::export_writer::{write_export, ExportError};
pub use io::state_store::StateStore;
pub use logger::{Logger, MockLogger, StderrLogger, Verbosity};
