//! # Tree Editing Integration Tests
//!
//! File: cli/tests/tree.rs
//!
//! `cmake-creator node ...`, `path`, `show`, and `reset` driven end to end
//! against a temporary project file.
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_build_nested_tree_and_resolve_paths() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["node", "add-folder", "root", "--name", "src", "--id", "src"])
        .assert()
        .success()
        .stdout("src\n");
    ws.cmd()
        .args(["node", "add-config", "src", "--id", "cfg"])
        .assert()
        .success()
        .stdout("cfg\n");
    ws.cmd()
        .args(["node", "add-config", "root", "--id", "top"])
        .assert()
        .success();

    ws.cmd()
        .args(["path", "cfg"])
        .assert()
        .success()
        .stdout("path: src/CMakeLists.txt\ndirectory: src\nparent: src\n");
    ws.cmd()
        .args(["path", "top"])
        .assert()
        .success()
        .stdout("path: CMakeLists.txt\ndirectory: /\nparent: Project Root\n");
    ws.cmd()
        .args(["path", "root"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("path: /\n"));

    ws.cmd()
        .args(["show", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Project/ (root)\n\
             ├── src/ (src)\n\
             │   └── CMakeLists.txt (cfg) [invalid]\n\
             └── CMakeLists.txt (top) [invalid] *\n",
        ));
}

#[test]
fn test_generated_ids_are_printed_and_usable() {
    let ws = Workspace::new();
    let folder = ws.add(&["node", "add-folder", "root"]);
    assert!(folder.starts_with("folder-"), "unexpected id {}", folder);
    let config = ws.add(&["node", "add-config", folder.as_str()]);
    assert!(config.starts_with("cmake-"), "unexpected id {}", config);

    ws.cmd()
        .args(["path", config.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: New Folder/CMakeLists.txt"));
}

#[test]
fn test_saved_project_uses_browser_compatible_json() {
    let ws = Workspace::new();
    ws.add(&["node", "add-folder", "root", "--name", "src", "--id", "src"]);
    ws.add(&["node", "add-config", "src", "--id", "cfg"]);

    let content = fs::read_to_string(ws.project_file()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["selectedNodeId"], "cfg");
    let src = &json["treeData"][0]["children"][0];
    assert_eq!(src["type"], "folder");
    assert_eq!(src["parentId"], "root");
    let cfg = &src["children"][0];
    assert_eq!(cfg["type"], "cmake");
    assert_eq!(cfg["cmakeForm"]["cmakeVersion"], "3.29");
    assert_eq!(cfg["cmakeForm"]["languages"][0], "CXX");
}

#[test]
fn test_rejected_edits() {
    let ws = Workspace::new();
    ws.add(&["node", "add-folder", "root", "--name", "src", "--id", "src"]);
    ws.add(&["node", "add-config", "src", "--id", "cfg"]);

    ws.cmd()
        .args(["node", "remove", "root"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project root node cannot be removed"));
    ws.cmd()
        .args(["node", "add-folder", "cfg", "--name", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a folder"));
    ws.cmd()
        .args(["node", "add-folder", "root", "--id", "src"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already used"));
    ws.cmd()
        .args(["node", "add-folder", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node 'ghost' not found"));
    ws.cmd()
        .args(["node", "rename", "src", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid node name"));
    ws.cmd()
        .args(["node", "add-folder", "root", "--name", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid node name"));
    ws.cmd()
        .args(["node", "add-config", "src", "--name", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid node name"));
    ws.cmd().arg("export").assert().success();
    ws.cmd()
        .args(["path", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Node 'ghost' not found"));
}

#[test]
fn test_rename_changes_paths() {
    let ws = Workspace::new();
    ws.add(&["node", "add-folder", "root", "--name", "src", "--id", "src"]);
    ws.add(&["node", "add-config", "src", "--id", "cfg"]);
    ws.cmd()
        .args(["node", "rename", "src", "source"])
        .assert()
        .success();
    ws.cmd()
        .args(["path", "cfg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path: source/CMakeLists.txt"));
}

#[test]
fn test_remove_cascades_and_clears_selection() {
    let ws = Workspace::new();
    ws.add(&["node", "add-folder", "root", "--name", "src", "--id", "src"]);
    ws.add(&["node", "add-config", "src", "--id", "cfg"]);
    ws.cmd().args(["node", "remove", "src"]).assert().success();

    ws.cmd().args(["path", "cfg"]).assert().failure();
    ws.cmd()
        .args(["show", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Project/ (root)\n\n"));
    ws.cmd()
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no node is selected"));
}

#[test]
fn test_select_and_reset() {
    let ws = Workspace::new();
    ws.add(&["node", "add-folder", "root", "--name", "src", "--id", "src"]);
    ws.cmd()
        .args(["node", "select", "src"])
        .assert()
        .success()
        .stdout("Selected 'src'\n");
    ws.cmd()
        .args(["node", "select", "ghost"])
        .assert()
        .failure();

    ws.cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("all folders and configuration nodes were removed"));
    ws.cmd().args(["path", "src"]).assert().failure();
}

#[test]
fn test_root_label_from_config() {
    let ws = Workspace::new();
    ws.write(".cmake-creator.toml", "[project]\nroot_label = \"ルート\"\n");
    ws.add(&["node", "add-config", "root", "--id", "top"]);
    ws.cmd()
        .args(["path", "top"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parent: ルート"));
}
