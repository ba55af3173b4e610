//! Argument-level CLI tests.
//!
//! These never touch real firmware: invalid arguments are rejected by clap
//! before any probe, and the probe cases point `--interface` at a path that
//! cannot exist.

use assert_cmd::Command;
use predicates::prelude::*;

fn batctl() -> Command {
    Command::cargo_bin("batctl").expect("binary builds")
}

#[test]
fn help_lists_subcommands() {
    batctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn rejects_unknown_field() {
    batctl()
        .args(["get", "charge-speed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn set_requires_a_value() {
    batctl()
        .args(["set", "charge-start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn missing_control_object_is_a_clean_error() {
    batctl()
        .args(["--interface", "/nonexistent/acpi/call", "get", "charge-start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no EC battery control object"));
}
