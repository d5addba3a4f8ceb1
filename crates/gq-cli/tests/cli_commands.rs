//! Integration tests for the gq CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temp directory holding a two-quarterback snapshot.
fn small_snapshot() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("qbs.json"),
        r#"{
  "lastUpdated": "2024-12-01",
  "qbs": [
    { "name": "Josh Allen", "athleteId": "3918298", "teamAbbr": "buf" },
    { "name": "Lamar Jackson", "athleteId": "3916387", "teamAbbr": "bal" }
  ]
}
"#,
    )
    .unwrap();
    dir
}

fn gq() -> Command {
    Command::cargo_bin("gq").unwrap()
}

// ---------------------------------------------------------------------------
// teams / divisions
// ---------------------------------------------------------------------------

#[test]
fn teams_lists_all_32() {
    gq().arg("teams")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buffalo Bills"))
        .stdout(predicate::str::contains("Seattle Seahawks"))
        .stdout(predicate::str::contains("32 teams"));
}

#[test]
fn teams_filters_by_division() {
    gq().args(["teams", "--division", "nfc north"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Green Bay Packers"))
        .stdout(predicate::str::contains("Dallas Cowboys").not())
        .stdout(predicate::str::contains("4 teams"));
}

#[test]
fn teams_with_logo_urls() {
    gq().args(["teams", "-d", "AFC West", "--urls"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://a.espncdn.com/i/teamlogos/nfl/500/kc.png",
        ));
}

#[test]
fn teams_unknown_division() {
    gq().args(["teams", "--division", "Pacific"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown division"));
}

#[test]
fn divisions_lists_eight() {
    gq().arg("divisions")
        .assert()
        .success()
        .stdout(predicate::str::contains("AFC North"))
        .stdout(predicate::str::contains("NFC West"))
        .stdout(predicate::str::contains("BAL, CIN, CLE, PIT"));
}

// ---------------------------------------------------------------------------
// lookup
// ---------------------------------------------------------------------------

#[test]
fn lookup_finds_division() {
    gq().args(["lookup", "Buffalo", "Bills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plays in the AFC East"));
}

#[test]
fn lookup_miss_is_not_an_error() {
    gq().args(["lookup", "buffalo bills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown team"));
}

// ---------------------------------------------------------------------------
// qbs
// ---------------------------------------------------------------------------

#[test]
fn qbs_bundled_snapshot() {
    gq().arg("qbs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Josh Allen"))
        .stdout(predicate::str::contains("32 quarterbacks"));
}

#[test]
fn qbs_single_team() {
    gq().args(["qbs", "--team", "KC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Patrick Mahomes"))
        .stdout(predicate::str::contains("1 quarterbacks"));
}

#[test]
fn qbs_with_headshot_urls() {
    let dir = small_snapshot();
    gq().args(["qbs", "--urls", "--team", "bal", "--data"])
        .arg(dir.path().join("qbs.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Headshot"))
        .stdout(predicate::str::contains(
            "https://a.espncdn.com/i/headshots/nfl/players/full/3916387.png",
        ))
        .stdout(predicate::str::contains("3918298.png").not());
}

#[test]
fn qbs_from_file_as_json() {
    let dir = small_snapshot();
    let output = gq()
        .args(["qbs", "--json", "--data"])
        .arg(dir.path().join("qbs.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["lastUpdated"], "2024-12-01");
    assert_eq!(parsed["qbs"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["qbs"][1]["teamAbbr"], "bal");
}

#[test]
fn qbs_missing_file() {
    gq().args(["qbs", "--data", "/nonexistent/qbs.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load quarterback data"));
}

#[test]
fn qbs_unknown_team() {
    gq().args(["qbs", "--team", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown team abbreviation"));
}

// ---------------------------------------------------------------------------
// interactive sessions
// ---------------------------------------------------------------------------

#[test]
fn guess_session_reads_stdin() {
    gq().args(["guess", "--seed", "42"])
        .write_stdin("Pacific\n1\nscore\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Which division do the"))
        .stdout(predicate::str::contains("not a division"))
        .stdout(predicate::str::contains("Score: "))
        .stdout(predicate::str::contains("Final score:"));
}

#[test]
fn guess_session_ends_on_eof() {
    gq().args(["guess", "--seed", "1"])
        .write_stdin("next\n")
        .assert()
        .success();
}

#[test]
fn assign_session_full_flow() {
    let mut script = String::new();
    for (abbr, division) in [
        ("buf", "AFC East"),
        ("mia", "AFC East"),
        ("ne", "AFC East"),
        ("nyj", "AFC East"),
    ] {
        script.push_str(&format!("assign {abbr} {division}\n"));
    }
    script.push_str("assign kc AFC East\nsubmit\nboard\nquit\n");

    gq().args(["assign", "--seed", "7"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("New York Jets -> AFC East (4/32 placed)"))
        .stdout(predicate::str::contains("AFC East is full (4 max)"))
        .stdout(predicate::str::contains("not finished yet: 4/32 assigned"));
}

#[test]
fn qb_session_with_small_snapshot() {
    let dir = small_snapshot();
    gq().args(["qb", "--seed", "3", "--data"])
        .arg(dir.path().join("qbs.json"))
        .write_stdin("assign Josh Allen bal\nassign Lamar Jackson buf\nsubmit\nshare\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("data as of 2024-12-01"))
        .stdout(predicate::str::contains("Score: 0 / 2 (0%)"))
        .stdout(predicate::str::contains("NFL QB Picker Results"))
        .stdout(predicate::str::contains("NFL QB Picker: 0/2 (0%)"));
}

#[test]
fn qb_session_perfect_on_small_snapshot() {
    let dir = small_snapshot();
    gq().args(["qb", "--data"])
        .arg(dir.path().join("qbs.json"))
        .write_stdin("select Lamar Jackson\nplace bal\nassign Josh Allen buf\nsubmit\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2 / 2 (100%)"));
}
