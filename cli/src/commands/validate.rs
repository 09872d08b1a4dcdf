//! # Validate Command
//!
//! File: cli/src/commands/validate.rs
//!
//! `cmake-creator validate` checks the whole project: every configuration node's
//! settings against the schema, every node name for emptiness, and the snapshot
//! for duplicate ids. Problems are listed one per line as
//! `<node path>: <field>: <message>`; the command fails when there are any.
//!
//! Configuration nodes that were never given settings are reported as notes, not
//! failures.
//!
use crate::commands::Session;
use crate::core::error::Result;
use crate::project::node::{find_duplicate_id, Node, NodeBody};
use crate::project::path::resolve_path;
use clap::Parser;
use std::path::Path;

/// Arguments for `cmake-creator validate`.
#[derive(Parser, Debug)]
pub struct ValidateArgs {}

/// One problem found in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub location: String,
    pub field: String,
    pub message: String,
}

/// Everything [`check_project`] found.
#[derive(Debug, Default)]
pub struct Report {
    pub problems: Vec<Problem>,
    /// Configuration nodes without settings.
    pub unset: Vec<String>,
}

pub async fn handle_validate(_args: ValidateArgs, project_file: Option<&Path>) -> Result<()> {
    let session = Session::open(project_file)?;
    let report = check_project(session.tree());
    for location in &report.unset {
        println!("note: {}: no settings yet", location);
    }
    if report.problems.is_empty() {
        println!("Project is valid.");
        return Ok(());
    }
    for problem in &report.problems {
        println!("{}: {}: {}", problem.location, problem.field, problem.message);
    }
    anyhow::bail!("{} problem(s) found", report.problems.len())
}

/// Checks every node of `tree`.
pub fn check_project(tree: &[Node]) -> Report {
    let mut report = Report::default();
    if let Some(id) = find_duplicate_id(tree) {
        report.problems.push(Problem {
            location: resolve_path(tree, id),
            field: "id".to_string(),
            message: format!("id '{}' is used more than once", id),
        });
    }
    visit(tree, tree, &mut report);
    report
}

fn visit(tree: &[Node], nodes: &[Node], report: &mut Report) {
    for node in nodes {
        let location = resolve_path(tree, &node.id);
        if node.name.trim().is_empty() {
            report.problems.push(Problem {
                location: location.clone(),
                field: "name".to_string(),
                message: "file name is required".to_string(),
            });
        }
        match &node.body {
            NodeBody::Folder { children } => visit(tree, children, report),
            NodeBody::Config {
                settings: Some(settings),
            } => {
                if let Err(errors) = settings.validate() {
                    for error in errors.fields() {
                        report.problems.push(Problem {
                            location: location.clone(),
                            field: error.path.clone(),
                            message: error.message.clone(),
                        });
                    }
                }
            }
            NodeBody::Config { settings: None } => report.unset.push(location),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::node::ROOT_ID;
    use crate::project::schema::{ConfigurationRecord, TargetKind, TargetRecord};

    fn valid(name: &str) -> ConfigurationRecord {
        let mut record = ConfigurationRecord::new_default("3.29");
        record.project_name = name.to_string();
        record
    }

    #[test]
    fn test_valid_project_has_no_problems() {
        let tree = vec![Node::folder(ROOT_ID, "Project").with_children(vec![
            Node::folder("src", "src").with_children(vec![Node::config(
                "cfg",
                "CMakeLists.txt",
                valid("App"),
            )]),
        ])];
        let report = check_project(&tree);
        assert!(report.problems.is_empty());
        assert!(report.unset.is_empty());
    }

    #[test]
    fn test_reports_field_errors_with_location() {
        let mut record = valid("");
        record.tool_version = "3".to_string();
        record.targets.push(TargetRecord::new("", TargetKind::Static));
        let tree = vec![Node::folder(ROOT_ID, "Project").with_children(vec![
            Node::folder("src", "src")
                .with_children(vec![Node::config("cfg", "CMakeLists.txt", record)]),
        ])];
        let report = check_project(&tree);
        let fields: Vec<&str> = report.problems.iter().map(|p| p.field.as_str()).collect();
        assert_eq!(fields, vec!["cmakeVersion", "projectName", "targets[0].name"]);
        assert!(report
            .problems
            .iter()
            .all(|p| p.location == "src/CMakeLists.txt"));
    }

    #[test]
    fn test_reports_duplicates_blank_names_and_unset() {
        let unset = Node {
            body: NodeBody::Config { settings: None },
            ..Node::folder("unset", "CMakeLists.txt")
        };
        let tree = vec![Node::folder(ROOT_ID, "Project").with_children(vec![
            Node::folder("dup", "a"),
            Node::folder("dup", "b"),
            Node::folder("blank", " "),
            unset,
        ])];
        let report = check_project(&tree);
        assert!(report.problems.iter().any(|p| p.field == "id" && p.location == "a"));
        assert!(report.problems.iter().any(|p| p.field == "name" && p.location == " "));
        assert_eq!(report.unset, vec!["CMakeLists.txt".to_string()]);
    }
}
