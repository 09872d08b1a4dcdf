//! # Node Command Group
//!
//! File: cli/src/commands/node.rs
//!
//! ## Overview
//!
//! Routes `cmake-creator node <subcommand>` to the tree mutator. Each subcommand
//! loads the project, builds a new snapshot, and saves it.
//!
//! ```bash
//! # Add a folder under the root; prints the new id
//! cmake-creator node add-folder root --name src
//!
//! # Add a CMakeLists.txt under that folder and select it
//! cmake-creator node add-config folder-1718000000000
//!
//! cmake-creator node rename folder-1718000000000 source
//! cmake-creator node remove folder-1718000000000
//! ```
//!
//! New configuration nodes start with default settings: the configured tool
//! version, no project name, `CXX` as the only language.
//!
use crate::commands::Session;
use crate::core::error::{CreatorError, Result};
use crate::project::mutate;
use crate::project::node::{generate_id, Node, NodeKind};
use crate::project::schema::ConfigurationRecord;
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
pub struct NodeArgs {
    #[command(subcommand)]
    command: NodeCommand,
}

#[derive(Subcommand, Debug)]
enum NodeCommand {
    /// Add an empty folder under PARENT.
    AddFolder(AddArgs),
    /// Add a configuration node (CMakeLists.txt) under PARENT and select it.
    AddConfig(AddArgs),
    /// Change a node's name.
    Rename(RenameArgs),
    /// Remove a node and everything below it.
    #[command(alias = "rm")]
    Remove(IdArgs),
    /// Make a node the current selection.
    Select(IdArgs),
}

#[derive(Parser, Debug)]
struct AddArgs {
    /// Id of the folder to add to.
    parent: String,
    /// Name of the new node (defaults come from the configuration).
    #[arg(long, short = 'n')]
    name: Option<String>,
    /// Use this id instead of generating one.
    #[arg(long)]
    id: Option<String>,
}

#[derive(Parser, Debug)]
struct RenameArgs {
    id: String,
    name: String,
}

#[derive(Parser, Debug)]
struct IdArgs {
    id: String,
}

pub async fn handle_node(args: NodeArgs, project_file: Option<&Path>) -> Result<()> {
    let mut session = Session::open(project_file)?;
    match args.command {
        NodeCommand::AddFolder(add) => {
            let name = add
                .name
                .unwrap_or_else(|| session.config.project.default_folder_name.clone());
            let id = add
                .id
                .unwrap_or_else(|| generate_id(session.tree(), NodeKind::Folder));
            let tree = mutate::insert_under(session.tree(), &add.parent, Node::folder(&id, name))?;
            session.commit_tree(tree)?;
            info!("Added folder '{}' under '{}'", id, add.parent);
            println!("{}", id);
        }
        NodeCommand::AddConfig(add) => {
            let project = &session.config.project;
            let name = add
                .name
                .unwrap_or_else(|| project.default_config_name.clone());
            let settings = ConfigurationRecord::new_default(&project.default_tool_version);
            let id = add
                .id
                .unwrap_or_else(|| generate_id(session.tree(), NodeKind::Config));
            let tree = mutate::insert_under(
                session.tree(),
                &add.parent,
                Node::config(&id, name, settings),
            )?;
            session.commit(tree, Some(id.clone()))?;
            info!("Added configuration node '{}' under '{}'", id, add.parent);
            println!("{}", id);
        }
        NodeCommand::Rename(rename) => {
            let tree = mutate::rename_node(session.tree(), &rename.id, &rename.name)?;
            session.commit_tree(tree)?;
            println!("Renamed '{}' to '{}'", rename.id, rename.name);
        }
        NodeCommand::Remove(target) => {
            let tree = mutate::delete_node(session.tree(), &target.id)?;
            session.commit_tree(tree)?;
            println!("Removed '{}'", target.id);
        }
        NodeCommand::Select(target) => {
            if mutate::locate(session.tree(), &target.id).is_none() {
                anyhow::bail!(CreatorError::NodeNotFound { id: target.id });
            }
            let tree = session.tree().to_vec();
            session.commit(tree, Some(target.id.clone()))?;
            println!("Selected '{}'", target.id);
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_add_config_with_name_and_id() {
        let args =
            NodeArgs::try_parse_from(["node", "add-config", "root", "--name", "X.txt", "--id", "c1"])
                .unwrap();
        match args.command {
            NodeCommand::AddConfig(add) => {
                assert_eq!(add.parent, "root");
                assert_eq!(add.name.as_deref(), Some("X.txt"));
                assert_eq!(add.id.as_deref(), Some("c1"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_remove_alias() {
        let args = NodeArgs::try_parse_from(["node", "rm", "src"]).unwrap();
        assert!(matches!(args.command, NodeCommand::Remove(IdArgs { ref id }) if id == "src"));
    }

    #[test]
    fn test_rename_requires_name() {
        assert!(NodeArgs::try_parse_from(["node", "rename", "src"]).is_err());
    }
}
