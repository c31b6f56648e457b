//! Plain-text report rendering.
//!
//! Produces the sectioned security summary shown on the terminal. The
//! string is plain text; any coloring happens at the CLI layer.

use std::fmt::Write;

use authwatch_schema::History;

use crate::aggregate::RunSummary;

/// Error lines shown in the terminal report.
pub const DISPLAY_ERROR_CAP: usize = 5;

/// Render the sectioned security summary for one run, with cumulative
/// context from the merged history.
pub fn render_report(summary: &RunSummary, history: &History) -> String {
    let mut out = String::new();

    section(&mut out, "Failed login attempts");
    if summary.failed_attempts.is_empty() {
        line(&mut out, "no failed logins in this window");
    } else {
        for (address, count) in &summary.failed_attempts {
            line(&mut out, &format!("{:<24} {} attempts", address, count));
        }
    }

    section(&mut out, "Accepted logins from multiple addresses");
    let suspicious = summary.suspicious_users();
    if suspicious.is_empty() {
        line(&mut out, "no unusual login activity");
    } else {
        for (user, addresses) in &suspicious {
            let joined: Vec<&str> = addresses.iter().copied().collect();
            line(&mut out, &format!("{:<16} {}", user, joined.join(", ")));
        }
    }

    section(&mut out, "System errors and kernel warnings");
    if summary.error_lines.is_empty() {
        line(&mut out, "no critical errors or warnings");
    } else {
        for err in summary.error_lines.iter().take(DISPLAY_ERROR_CAP) {
            line(&mut out, err);
        }
        let hidden = summary.error_lines.len().saturating_sub(DISPLAY_ERROR_CAP);
        if hidden > 0 {
            line(&mut out, &format!("(+{} more)", hidden));
        }
    }

    section(&mut out, "Cumulative history");
    line(
        &mut out,
        &format!(
            "{} failed attempts on record across {} addresses; {} accounts tracked",
            history.total_failed(),
            history.failed_logins.len(),
            history.suspicious_logins.len()
        ),
    );

    out
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    writeln!(out, "== {} ==", title).expect("writing to String cannot fail");
}

fn line(out: &mut String, text: &str) {
    writeln!(out, "  {}", text).expect("writing to String cannot fail");
}
