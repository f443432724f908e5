//! End-to-end tests of the mercy binary.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const ANSWERS: &str = "Welcome Wagon\n\nGreets new members\nsocial\nSam Doe\nsam@example.com\n\n";

fn mercy() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mercy"))
}

#[test]
fn no_subcommand_prints_usage() {
    mercy()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_prints_usage() {
    mercy()
        .arg("deploy")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn init_then_validate() {
    let tmp = TempDir::new().unwrap();

    mercy()
        .args(["init", "--into"])
        .arg(tmp.path())
        .write_stdin(ANSWERS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created integration: welcome-wagon (WelcomeWagon)"))
        .stderr(predicate::str::contains("Integration id [welcome-wagon]"));

    let project = tmp.child("welcome-wagon");
    project.child("integration.json").assert(predicate::path::exists());
    project.child("test").assert(predicate::path::is_dir());
    project
        .child("src/index.js")
        .assert(predicate::str::contains("export default class WelcomeWagon"));

    mercy()
        .arg("validate")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 100/100"))
        .stdout(predicate::str::contains("Status: PASSED"));
}

#[test]
fn init_json_summary() {
    let tmp = TempDir::new().unwrap();

    let output = mercy()
        .args(["init", "--style", "extends", "--format", "json", "--into"])
        .arg(tmp.path())
        .write_stdin(ANSWERS)
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["integration_id"], "welcome-wagon");
    assert_eq!(summary["style"], "extends");
    assert_eq!(summary["files_created"].as_array().unwrap().len(), 6);
}

#[test]
fn init_rejects_invalid_id() {
    let tmp = TempDir::new().unwrap();

    mercy()
        .args(["init", "--into"])
        .arg(tmp.path())
        .write_stdin("Bad\nNot Valid!\n\n\nSam\nsam@example.com\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid integration id"));

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn init_fails_when_input_ends() {
    let tmp = TempDir::new().unwrap();

    mercy()
        .args(["init", "--into"])
        .arg(tmp.path())
        .write_stdin("Only A Name\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input ended"));
}

#[test]
fn validate_reports_failures() {
    let tmp = TempDir::new().unwrap();
    tmp.child("integration.json").write_str("{}").unwrap();

    mercy()
        .arg("validate")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing required file"))
        .stdout(predicate::str::contains("Status: FAILED"));
}

#[test]
fn validate_json_report() {
    let tmp = TempDir::new().unwrap();

    let output = mercy()
        .args(["validate", "--format", "json"])
        .arg(tmp.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["isValid"], false);
    assert!(report["errors"].as_array().unwrap().len() >= 4);
}

#[test]
fn validate_missing_directory() {
    let tmp = TempDir::new().unwrap();

    mercy()
        .arg("validate")
        .arg(tmp.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot validate"));
}
