//! authwatch CLI binary.
//!
//! Entry point for the `authwatch` command-line tool.

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use authwatch::exit::{codes, exit_code};
use authwatch::{
    execute_report, execute_reset, Cli, CommandError, ReportResult, StderrLogger,
    StdinConfirmer, Verbosity,
};
use authwatch_analyzer::{advisory_notes, block_commands, render_report};
use authwatch_fs::RealFilesystem;
use authwatch_journal::JournalctlJournal;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = StderrLogger::new(Verbosity::from_count(cli.verbose));

    let result = if cli.reset {
        run_reset(&cli, &logger)
    } else {
        run_report(&cli, &logger)
    };

    match result {
        Ok(()) => ExitCode::from(codes::SUCCESS as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}

/// Run the destructive reset path.
fn run_reset(cli: &Cli, logger: &StderrLogger) -> Result<(), CommandError> {
    let journal = JournalctlJournal::new(&cli.unit);
    let confirmer = StdinConfirmer::new();

    println!(
        "{}",
        format!("WARNING: about to purge journal records for {}", cli.unit)
            .red()
            .bold()
    );

    let result = execute_reset(&journal, &confirmer, logger)?;
    if result.purged {
        println!("{}", "journal records purged".green());
    } else {
        println!("canceled, nothing removed");
    }

    Ok(())
}

/// Run the analysis and reporting path.
fn run_report(cli: &Cli, logger: &StderrLogger) -> Result<(), CommandError> {
    let journal = JournalctlJournal::new(&cli.unit);
    let fs = RealFilesystem;

    let result = execute_report(cli, &journal, &fs, logger)?;

    print_report(&result);

    if cli.recommend {
        print_recommendations(&result);
    }

    Ok(())
}

fn print_report(result: &ReportResult) {
    let report = render_report(&result.summary, &result.history);
    for line in report.lines() {
        if line.starts_with("== ") {
            println!("{}", line.cyan().bold());
        } else {
            println!("{}", line);
        }
    }
}

fn print_recommendations(result: &ReportResult) {
    println!();
    println!("{}", "== Recommendations ==".cyan().bold());
    for rec in block_commands(&result.summary) {
        println!(
            "  {} ({} attempts): {}",
            rec.address.red(),
            rec.attempts,
            rec.command
        );
    }
    for note in advisory_notes(&result.summary) {
        println!("  - {}", note.yellow());
    }
}
