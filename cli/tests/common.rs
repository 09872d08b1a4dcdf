//! # cmake-creator Integration Test Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test works in
//! its own temporary directory: the project file, any `.cmake-creator.toml`, and
//! the home/config directories all live there so the user's real setup is never
//! read or touched.
//!
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A `Command` for the compiled `cmake-creator` binary.
pub fn creator_cmd() -> Command {
    Command::cargo_bin("cmake-creator").expect("Failed to find cmake-creator binary for testing")
}

/// A scratch workspace with its own project file.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn project_file(&self) -> PathBuf {
        self.path().join("project.json")
    }

    /// `cmake-creator --project <tmp>/project.json`, run inside the workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = creator_cmd();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("XDG_DATA_HOME", self.path().join(".local/share"))
            .env_remove("CMAKE_CREATOR_PROJECT")
            .env_remove("RUST_LOG")
            .arg("--project")
            .arg(self.project_file());
        cmd
    }

    /// Runs a command that prints a node id and returns it.
    pub fn add(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().expect("command runs");
        assert!(
            output.status.success(),
            "{:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Writes `content` to `name` inside the workspace and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }
}

/// A complete, valid settings record in TOML form.
pub const APP_SETTINGS: &str = r#"
cmakeVersion = "3.29"
projectName = "MyApp"
languages = ["CXX"]
options = ["-Wall"]

[[targets]]
name = "app"
kind = "executable"
sources = ["main.cpp", "util.cpp"]
linkLibs = ["fmt"]
"#;
