//! Integration tests for gq-tui argument handling.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn gq_tui() -> Command {
    Command::cargo_bin("gq-tui").unwrap()
}

#[test]
fn unknown_mode_exits_with_error() {
    gq_tui()
        .args(["--mode", "dice"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown mode: \"dice\""));
}

#[test]
fn missing_snapshot_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    gq_tui()
        .args(["--mode", "qb", "--data"])
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to load quarterback data"));
}
