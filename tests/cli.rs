#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn cli(state: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roulement-cli").unwrap();
    cmd.arg("--state").arg(state);
    cmd
}

fn setup_team(state: &Path, members: &[&str]) {
    for name in members {
        cli(state).args(["add-member", "--name", *name]).assert().success();
    }
    cli(state)
        .args(["params", "--start", "2024-01-01", "--days", "5", "--skip-weekends", "false"])
        .assert()
        .success();
}

#[test]
fn generate_and_list() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("planning.json");
    setup_team(&state, &["Alice", "Bob", "Charlie", "David", "Eve"]);

    cli(&state)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 day(s) planned"));

    cli(&state)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2024-01-01 | 18h: Alice, Bob, Charlie | 16h: David, Eve",
        ))
        .stdout(predicate::str::contains(
            "2024-01-02 | 18h: Bob, Charlie, David | 16h: Eve, Alice",
        ));

    cli(&state)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn leave_and_lock_flow() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("planning.json");
    setup_team(&state, &["Alice", "Bob", "Charlie", "David", "Eve"]);

    cli(&state)
        .args(["add-leave", "--name", "Alice", "--from", "2024-01-03", "--to", "2024-01-05"])
        .assert()
        .success();
    cli(&state).arg("generate").assert().success();
    cli(&state)
        .args(["summary", "--date", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Absents: Alice"));

    cli(&state)
        .args(["edit", "--date", "2024-01-02", "--early", "Alice,Bob,Charlie", "--late", "David,Eve"])
        .assert()
        .success();
    cli(&state).arg("generate").assert().success();
    cli(&state)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2024-01-02 | 18h: Alice, Bob, Charlie | 16h: David, Eve | verrouillé",
        ));

    // répartition faussée par le verrou et le congé : code 2
    cli(&state).arg("stats").assert().code(2);
}

#[test]
fn incomplete_team_is_rejected() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("planning.json");
    setup_team(&state, &["Alice", "Bob", "Charlie", "David"]);

    cli(&state)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid roster size"));
}

#[test]
fn exports_are_written() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("planning.json");
    setup_team(&state, &["Alice", "Bob", "Charlie", "David", "Eve"]);
    cli(&state).arg("generate").assert().success();

    let csv = dir.path().join("planning.csv");
    let ics = dir.path().join("planning.ics");
    let backup = dir.path().join("backup.json");
    cli(&state)
        .args(["list", "--out-csv"])
        .arg(&csv)
        .assert()
        .success();
    cli(&state).args(["ics", "--out"]).arg(&ics).assert().success();
    cli(&state).args(["backup", "--out"]).arg(&backup).assert().success();

    assert!(std::fs::read_to_string(&csv).unwrap().starts_with("date,early_1"));
    assert!(std::fs::read_to_string(&ics).unwrap().contains("BEGIN:VEVENT"));

    cli(&state).arg("reset").assert().success();
    assert!(!state.exists());
    cli(&state).args(["restore", "--path"]).arg(&backup).assert().success();
    cli(&state)
        .arg("list-team")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 | Alice (A)"));
}

#[test]
fn ics_rejects_unknown_timezone() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("planning.json");
    setup_team(&state, &["Alice", "Bob", "Charlie", "David", "Eve"]);
    cli(&state).arg("generate").assert().success();

    cli(&state)
        .args(["ics", "--timezone", "Mars/Olympus"])
        .arg("--out")
        .arg(dir.path().join("planning.ics"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown timezone"));
}
