//! CLI argument tests.

use super::rf_scaffold;
use predicates::prelude::*;

#[test]
fn test_arg_help() {
    rf_scaffold()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate Robot Framework compilation-output test scaffolds",
        ))
        .stdout(predicate::str::contains("--unique-codes"))
        .stdout(predicate::str::contains("--rules"));
}

#[test]
fn test_arg_version() {
    rf_scaffold()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rf-scaffold"));
}

#[test]
fn test_arg_path_required() {
    rf_scaffold()
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATH").or(predicate::str::contains("path")));
}

#[test]
fn test_arg_unknown_flag() {
    rf_scaffold()
        .args(["/nonexistent", "--frobnicate"])
        .assert()
        .failure();
}

#[test]
fn test_arg_rules_requires_value() {
    rf_scaffold()
        .args(["/nonexistent", "--rules"])
        .assert()
        .failure();
}
