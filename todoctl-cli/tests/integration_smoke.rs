//! Smoke tests to verify binary wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("Database file path"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("todoctl").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("todoctl"));
}
