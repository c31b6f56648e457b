//! Report command orchestration.
//!
//! The main pipeline: fetch journal lines for the window, aggregate them,
//! merge with the persisted history, write the snapshot back, and export
//! if requested.

use std::path::PathBuf;

use authwatch_analyzer::{aggregate, merge, Classifier, ExportDocument, RunSummary};
use authwatch_fs::Filesystem;
use authwatch_journal::{Journal, JournalError};
use authwatch_schema::History;

use crate::cli::Cli;
use crate::io::export_writer::write_export;
use crate::io::state_store::StateStore;
use crate::logger::Logger;

use super::CommandResult;

/// Result of report command execution.
#[derive(Debug)]
pub struct ReportResult {
    /// Journal lines fetched for the window.
    pub lines_scanned: usize,
    /// Per-run aggregates.
    pub summary: RunSummary,
    /// Merged cumulative history (already persisted, best effort).
    pub history: History,
    /// Export path, when an export was requested and written.
    pub export_written: Option<PathBuf>,
    /// Non-fatal problems encountered along the way.
    pub warnings: Vec<String>,
}

/// Execute the report command.
pub fn execute_report<J, F, L>(
    args: &Cli,
    journal: &J,
    fs: &F,
    logger: &L,
) -> CommandResult<ReportResult>
where
    J: Journal,
    F: Filesystem,
    L: Logger,
{
    args.validate()?;

    let window = args.window();
    logger.verbose(&format!(
        "querying journal of {} since \"{}\"",
        args.unit, window.since
    ));

    let mut warnings = Vec::new();

    // A journal that ran but reported failure yields an empty window; only
    // failure to invoke it at all aborts the run.
    let lines = match journal.fetch(&window) {
        Ok(lines) => lines,
        Err(err @ JournalError::CommandFailed { .. }) => {
            let warning = format!("journal query failed ({}); continuing with no lines", err);
            logger.info(&warning);
            warnings.push(warning);
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };
    logger.verbose(&format!("{} journal lines in window", lines.len()));

    let classifier = Classifier::new();
    let summary = aggregate(&classifier, &lines);

    let store = StateStore::new(fs, &args.state);
    let prior = store.load();
    if prior.is_empty() {
        logger.debug("no usable prior history, starting empty");
    }

    let history = merge(&prior, &summary);
    if let Err(err) = store.save(&history) {
        let warning = format!(
            "failed to persist history to {}: {}",
            args.state.display(),
            err
        );
        logger.info(&warning);
        warnings.push(warning);
    }

    let mut export_written = None;
    if let Some(path) = &args.export {
        let doc = ExportDocument::from_summary(&summary);
        match write_export(fs, path, &doc) {
            Ok(()) => {
                logger.verbose(&format!("exported run summary to {}", path.display()));
                export_written = Some(path.clone());
            }
            Err(err) => {
                let warning = format!("export skipped: {}", err);
                logger.info(&warning);
                warnings.push(warning);
            }
        }
    }

    Ok(ReportResult {
        lines_scanned: lines.len(),
        summary,
        history,
        export_written,
        warnings,
    })
}
