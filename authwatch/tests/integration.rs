//! End-to-end command tests over mock collaborators.

use std::path::Path;

use authwatch::{
    execute_report, execute_reset, parse_from, Cli, CommandError, MockLogger, ScriptedConfirmer,
    StateStore,
};
use authwatch_analyzer::ExportDocument;
use authwatch_fs::{Filesystem, MockFilesystem, RealFilesystem};
use authwatch_journal::MockJournal;
use authwatch_schema::History;

const RUN_ONE: [&str; 4] = [
    "Aug 07 10:02:11 bastion sshd[914]: Failed password for root from 198.51.100.4 port 52210 ssh2",
    "Aug 07 10:02:14 bastion sshd[914]: Failed password for root from 198.51.100.4 port 52211 ssh2",
    "Aug 07 10:05:40 bastion sshd[951]: Accepted password for alice from 10.0.0.1 port 40122 ssh2",
    "Aug 07 10:06:02 bastion kernel: oom-killer invoked on process 4242",
];

const RUN_TWO: [&str; 3] = [
    "Aug 07 11:01:09 bastion sshd[1204]: Failed password for root from 198.51.100.4 port 52299 ssh2",
    "Aug 07 11:03:30 bastion sshd[1220]: Accepted password for alice from 10.0.0.2 port 40188 ssh2",
    "Aug 07 11:04:00 bastion sshd[1222]: error: maximum authentication attempts exceeded",
];

fn args(extra: &[&str]) -> Cli {
    let mut argv = vec!["authwatch", "--state", "/state/history.json"];
    argv.extend_from_slice(extra);
    parse_from(argv).expect("parse")
}

#[test]
fn report_then_report_accumulates_across_runs() {
    let fs = MockFilesystem::new();
    let logger = MockLogger::new();
    let args = args(&[]);

    let first = execute_report(&args, &MockJournal::with_lines(RUN_ONE), &fs, &logger)
        .expect("first run");
    assert_eq!(first.history.failed_logins.get("198.51.100.4"), Some(&2));
    assert_eq!(
        first
            .history
            .suspicious_logins
            .get("alice")
            .map(|s| s.len()),
        Some(1)
    );
    // One address so far: alice is not yet flagged.
    assert!(first.summary.suspicious_users().is_empty());

    let second = execute_report(&args, &MockJournal::with_lines(RUN_TWO), &fs, &logger)
        .expect("second run");

    // Counts accumulated, address set unioned.
    assert_eq!(second.history.failed_logins.get("198.51.100.4"), Some(&3));
    assert_eq!(
        second
            .history
            .suspicious_logins
            .get("alice")
            .map(|s| s.len()),
        Some(2)
    );

    // The persisted snapshot equals the returned history.
    let on_disk = fs
        .read_file(Path::new("/state/history.json"))
        .expect("state file");
    assert_eq!(History::from_json(&on_disk).expect("parse"), second.history);
}

#[test]
fn export_roundtrip_through_filesystem() {
    let fs = MockFilesystem::new();
    let logger = MockLogger::new();

    let result = execute_report(
        &args(&["--export", "/out/run.json"]),
        &MockJournal::with_lines(RUN_ONE),
        &fs,
        &logger,
    )
    .expect("run");

    let written = fs.read_file(Path::new("/out/run.json")).expect("export");
    let doc = ExportDocument::from_json(&written).expect("parse");

    assert_eq!(doc.failed_attempts, result.summary.failed_attempts);
    assert_eq!(doc.accepted_logins, result.summary.accepted_logins);
    assert_eq!(doc.system_errors.len(), 1);
}

#[test]
fn text_export_contains_sections() {
    let fs = MockFilesystem::new();
    let logger = MockLogger::new();

    execute_report(
        &args(&["--export", "/out/run.txt"]),
        &MockJournal::with_lines(RUN_ONE),
        &fs,
        &logger,
    )
    .expect("run");

    let written = fs.read_file(Path::new("/out/run.txt")).expect("export");
    assert!(written.contains("FAILED LOGIN ATTEMPTS"));
    assert!(written.contains("198.51.100.4 2"));
}

#[test]
fn unsupported_export_format_does_not_abort_the_run() {
    let fs = MockFilesystem::new();
    let logger = MockLogger::new();

    let result = execute_report(
        &args(&["--export", "/out/run.yaml"]),
        &MockJournal::with_lines(RUN_ONE),
        &fs,
        &logger,
    )
    .expect("run");

    assert!(result.export_written.is_none());
    assert!(logger.contains("unsupported export format"));
    // Reporting and persistence still happened.
    assert!(fs.exists(Path::new("/state/history.json")));
}

#[test]
fn journal_failure_status_yields_empty_report() {
    let fs = MockFilesystem::new();
    let logger = MockLogger::new();
    let journal = MockJournal::new();
    journal.fail_fetch_status(3);

    let result = execute_report(&args(&[]), &journal, &fs, &logger).expect("run");

    assert_eq!(result.lines_scanned, 0);
    assert!(result.summary.is_empty());
    assert!(!result.warnings.is_empty());
}

#[test]
fn journal_spawn_failure_aborts() {
    let fs = MockFilesystem::new();
    let logger = MockLogger::new();
    let journal = MockJournal::new();
    journal.fail_fetch_spawn();

    let result = execute_report(&args(&[]), &journal, &fs, &logger);

    assert!(matches!(result, Err(CommandError::Journal(_))));
}

#[test]
fn reset_purges_only_with_confirmation() {
    let logger = MockLogger::new();

    let declined = MockJournal::new();
    execute_reset(&declined, &ScriptedConfirmer::new(false), &logger).expect("declined");
    assert_eq!(declined.purge_count(), 0);

    let confirmed = MockJournal::new();
    execute_reset(&confirmed, &ScriptedConfirmer::new(true), &logger).expect("confirmed");
    assert_eq!(confirmed.purge_count(), 1);
}

#[test]
fn reset_failure_after_confirmation_is_an_error() {
    let logger = MockLogger::new();
    let journal = MockJournal::new();
    journal.fail_purge();

    let result = execute_reset(&journal, &ScriptedConfirmer::new(true), &logger);

    assert!(matches!(result, Err(CommandError::Journal(_))));
}

#[test]
fn state_survives_on_the_real_filesystem() {
    let dir = tempfile::tempdir().expect("temp dir");
    let state_path = dir.path().join("history.json");
    let fs = RealFilesystem;
    let logger = MockLogger::new();

    let argv = [
        "authwatch",
        "--state",
        state_path.to_str().expect("utf8 path"),
    ];
    let args = parse_from(argv).expect("parse");

    execute_report(&args, &MockJournal::with_lines(RUN_ONE), &fs, &logger).expect("first");
    let second =
        execute_report(&args, &MockJournal::with_lines(RUN_TWO), &fs, &logger).expect("second");

    let store = StateStore::new(&fs, &state_path);
    assert_eq!(store.load(), second.history);
    assert_eq!(second.history.failed_logins.get("198.51.100.4"), Some(&3));
}
