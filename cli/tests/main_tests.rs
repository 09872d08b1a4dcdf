//! # cmake-creator CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! Top-level behavior of the `cmake-creator` binary: `--help`, `--version`,
//! unknown commands, and the first-run experience.
//!
mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    creator_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("render")
            .and(predicate::str::contains("node"))
            .and(predicate::str::contains("export")),
    );
}

#[test]
fn test_version_flag() {
    creator_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command_fails() {
    creator_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_show_before_init_prints_default_root() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["show", "--plain"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Project/ (root)\n")
                .and(predicate::str::contains("(not saved yet)")),
        );
    assert!(!ws.project_file().exists());
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let ws = Workspace::new();
    ws.cmd().arg("init").assert().success();
    assert!(ws.project_file().is_file());

    ws.cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use --force"));
    ws.cmd().args(["init", "--force"]).assert().success();
}

#[test]
fn test_project_config_changes_root_name() {
    let ws = Workspace::new();
    ws.write(".cmake-creator.toml", "[project]\nroot_name = \"MyRepo\"\n");
    ws.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty project 'MyRepo'"));
    ws.cmd()
        .args(["show", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("MyRepo/ (root)\n"));
}

#[test]
fn test_invalid_config_is_reported() {
    let ws = Workspace::new();
    ws.write(".cmake-creator.toml", "[project]\nunknown_key = 1\n");
    ws.cmd()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
