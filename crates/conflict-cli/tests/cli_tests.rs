//! Integration tests for the sync-conflicts binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use conflict_test_utils::TestTree;
use predicates::prelude::*;

const OLD: &str = "report.txt.sync-conflict-20150101-120000";
const NEW: &str = "report.txt.sync-conflict-20150102-090000";

/// Get a Command for the sync-conflicts binary
fn cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sync-conflicts"));
    cmd.env_remove("SYNC_CONFLICTS_LOG");
    cmd
}

fn report_tree() -> TestTree {
    let tree = TestTree::new();
    tree.file("report.txt", "original", 100)
        .file(OLD, "older", 50)
        .file(NEW, "newest", 200);
    tree
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync-conflict"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_version_output() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync-conflicts"));
}

#[test]
fn test_directory_argument_is_required() {
    cmd().assert().failure();
}

// ============================================================================
// Configuration Errors
// ============================================================================

#[test]
fn test_target_must_be_a_directory() {
    let tree = TestTree::new();
    tree.file("plain.txt", "x", 0);

    cmd()
        .arg(tree.path("plain.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));

    assert!(tree.exists("plain.txt"));
}

#[test]
fn test_invalid_log_level_aborts_before_work() {
    let tree = report_tree();
    let before = tree.snapshot();

    cmd()
        .args(["--log", "LOUD"])
        .arg(tree.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid log level"));

    assert_eq!(tree.snapshot(), before);
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_resolves_newest_conflict() {
    let tree = report_tree();

    cmd()
        .arg(tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Done, 2 files deleted, 1 files renamed."));

    assert_eq!(tree.read("report.txt").as_deref(), Some("newest"));
    assert_eq!(tree.snapshot().len(), 1);
}

#[test]
fn test_dry_run_changes_nothing() {
    let tree = report_tree();
    let before = tree.snapshot();

    cmd()
        .arg("-n")
        .arg(tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Done, 0 files deleted, 0 files renamed."))
        .stderr(predicate::str::contains("DRY RUN: would delete").count(2))
        .stderr(predicate::str::contains("DRY RUN: would rename"));

    assert_eq!(tree.snapshot(), before);
}

#[test]
fn test_orphan_emits_warning() {
    let tree = TestTree::new();
    tree.file("orphan.sync-conflict-20150101-120000", "x", 0);

    cmd()
        .arg(tree.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("Orphaned conflict marker"))
        .stdout(predicate::str::contains("Done, 0 files deleted, 0 files renamed."));

    assert!(tree.exists("orphan.sync-conflict-20150101-120000"));
}

#[test]
fn test_error_level_hides_warnings() {
    let tree = TestTree::new();
    tree.file("orphan.sync-conflict-20150101-120000", "x", 0);

    cmd()
        .args(["-l", "error"])
        .arg(tree.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("Orphaned").not());
}

#[test]
fn test_log_level_from_environment() {
    let tree = report_tree();

    cmd()
        .env("SYNC_CONFLICTS_LOG", "DEBUG")
        .arg("--dry-run")
        .arg(tree.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("Linked conflict"));
}

#[test]
fn test_recursive_flag_descends() {
    let tree = TestTree::new();
    tree.file("nested/a.txt", "old", 0)
        .file("nested/a.sync-conflict-20150101-120000.txt", "new", 10);

    cmd()
        .arg(tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Done, 0 files deleted, 0 files renamed."));

    cmd()
        .arg("-r")
        .arg(tree.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Done, 1 files deleted, 1 files renamed."));

    assert_eq!(tree.read("nested/a.txt").as_deref(), Some("new"));
}

#[test]
fn test_json_report() {
    let tree = report_tree();

    let output = cmd()
        .arg("--json")
        .arg(tree.root())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["deleted"], 2);
    assert_eq!(report["renamed"], 1);
    assert_eq!(report["groups_resolved"], 1);
}

// ============================================================================
// Interactive Mode
// ============================================================================

#[test]
fn test_interactive_is_ignored_in_dry_run() {
    let tree = report_tree();
    let before = tree.snapshot();

    cmd()
        .args(["-i", "-n"])
        .arg(tree.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("DRY RUN: would rename"));

    assert_eq!(tree.snapshot(), before);
}

#[test]
fn test_interactive_piped_yes_resolves() {
    let tree = report_tree();

    cmd()
        .arg("-i")
        .arg(tree.root())
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Keep"))
        .stdout(predicate::str::contains("Done, 2 files deleted, 1 files renamed."));

    assert_eq!(tree.read("report.txt").as_deref(), Some("newest"));
    assert_eq!(tree.snapshot().len(), 1);
}

#[test]
fn test_interactive_piped_no_declines() {
    let tree = report_tree();
    let before = tree.snapshot();

    cmd()
        .arg("-i")
        .arg(tree.root())
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped by user"))
        .stdout(predicate::str::contains("Done, 0 files deleted, 0 files renamed."));

    assert_eq!(tree.snapshot(), before);
}

#[test]
fn test_interactive_without_input_declines() {
    let tree = report_tree();
    let before = tree.snapshot();

    cmd()
        .arg("-i")
        .arg(tree.root())
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped by user"));

    assert_eq!(tree.snapshot(), before);
}

#[test]
fn test_interactive_json_keeps_stdout_parseable() {
    let tree = report_tree();

    let output = cmd()
        .args(["-i", "--json"])
        .arg(tree.root())
        .write_stdin("y\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(OLD))
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["deleted"], 2);
    assert_eq!(report["renamed"], 1);
}
