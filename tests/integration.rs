// Integration tests for the devmeter CLI surface.
//
// These invoke the binary through assert_cmd and check argument handling,
// exit codes and stdout.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn devmeter() -> Command {
    Command::cargo_bin("devmeter").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    devmeter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("devmeter"));
}

#[test]
fn cli_help_flag() {
    devmeter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hireability rating"));
}

#[test]
fn score_requires_file() {
    devmeter()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn analyze_rejects_unknown_format() {
    devmeter()
        .args(["analyze", "snapshot.json", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    devmeter()
        .args(["-q", "-v", "weights"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn weights_prints_builtin_defaults() {
    let dir = tempfile::TempDir::new().expect("temp dir should be created");
    devmeter()
        .arg("--config")
        .arg(dir.path())
        .arg("weights")
        .assert()
        .success()
        .stdout(predicate::str::contains("activity_level: 0.25"))
        .stdout(predicate::str::contains("code_quality: 0.20"))
        .stdout(predicate::str::contains("impact: 0.10"));
}
