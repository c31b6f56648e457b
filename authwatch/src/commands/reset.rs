//! Reset command orchestration.
//!
//! The only destructive operation: rotate and vacuum the journal. Gated
//! by an injected `Confirmer` and never executed without an explicit yes.

use authwatch_journal::Journal;

use crate::io::confirm::Confirmer;
use crate::logger::Logger;

use super::CommandResult;

/// Prompt shown before the purge.
pub const PURGE_PROMPT: &str =
    "This permanently removes the monitored journal records. Continue?";

/// Result of reset command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct ResetResult {
    /// True when the journal was actually purged.
    pub purged: bool,
}

/// Execute the reset command.
///
/// A declined confirmation is a graceful outcome, not an error; a purge
/// that fails after confirmation is surfaced.
pub fn execute_reset<J, C, L>(journal: &J, confirmer: &C, logger: &L) -> CommandResult<ResetResult>
where
    J: Journal,
    C: Confirmer,
    L: Logger,
{
    if !confirmer.confirm(PURGE_PROMPT) {
        logger.info("reset canceled");
        return Ok(ResetResult { purged: false });
    }

    logger.verbose("rotating and vacuuming journal");
    journal.purge()?;
    logger.info("journal records purged");

    Ok(ResetResult { purged: true })
}
