//! Backup and restore flow over real files.

use std::fs;

use ccprune::files::{backup, session};
use ccprune::transcript::keep_recent_assistants;

const ORIGINAL: &str = concat!(
    r#"{"type":"summary"}"#,
    "\n",
    r#"{"type":"user","uuid":"1"}"#,
    "\n",
    r#"{"type":"assistant","uuid":"2"}"#,
    "\n",
    r#"{"type":"user","uuid":"3"}"#,
    "\n",
    r#"{"type":"assistant","uuid":"4"}"#,
    "\n",
);

#[test]
fn prune_writes_backup_then_rewrites_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sess-42.jsonl");
    fs::write(&path, ORIGINAL).unwrap();

    let lines = session::read_lines(&path).unwrap();
    assert_eq!(lines.len(), 5);

    let outcome = keep_recent_assistants(&lines, 1);
    let backup_path = backup::create_backup(&path).unwrap();
    session::write_lines(&path, &outcome.lines).unwrap();

    // The backup holds the original bytes; the session holds the pruned
    // tail with a single trailing newline.
    assert_eq!(fs::read_to_string(&backup_path).unwrap(), ORIGINAL);
    let rewritten = fs::read_to_string(&path).unwrap();
    assert_eq!(
        rewritten,
        concat!(
            r#"{"type":"summary"}"#,
            "\n",
            r#"{"type":"assistant","uuid":"4"}"#,
            "\n",
        )
    );
}

#[test]
fn restore_round_trips_the_original() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sess-43.jsonl");
    fs::write(&path, ORIGINAL).unwrap();

    backup::create_backup(&path).unwrap();
    let lines = session::read_lines(&path).unwrap();
    let outcome = keep_recent_assistants(&lines, 0);
    session::write_lines(&path, &outcome.lines).unwrap();
    assert_ne!(fs::read_to_string(&path).unwrap(), ORIGINAL);

    backup::restore_from_backup(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), ORIGINAL);
}

#[test]
fn repeated_prunes_stack_backups() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sess-44.jsonl");
    fs::write(&path, ORIGINAL).unwrap();

    let first = backup::create_backup(&path).unwrap();
    fs::write(&path, "{\"type\":\"summary\"}\n").unwrap();
    // Timestamps are millisecond-stamped; nudge the clock dependence out of
    // the way by renaming the first backup a step earlier.
    let earlier = backup::backup_path_for(&path, 1);
    fs::rename(&first, &earlier).unwrap();
    let second = backup::create_backup(&path).unwrap();

    let backups = backup::list_backups(&path).unwrap();
    assert_eq!(backups.len(), 2);
    assert_eq!(backups[0], earlier);
    assert_eq!(backups[1], second);
    assert_eq!(backup::latest_backup(&path).unwrap(), Some(second));
}
