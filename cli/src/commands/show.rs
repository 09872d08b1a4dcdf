//! # Project Tree Printer
//!
//! File: cli/src/commands/show.rs
//!
//! ## Overview
//!
//! `cmake-creator show` prints the project tree in the style of the `tree`
//! utility, with each node's id so it can be passed to other commands:
//!
//! ```text
//! Project/ (root)
//! ├── src/ (folder-1718000000000)
//! │   └── CMakeLists.txt (cmake-1718000000001) *
//! └── CMakeLists.txt (cmake-1718000000002) [invalid]
//! ```
//!
//! Folders are printed in bold (ANSI) unless `--plain` is given. `*` marks the
//! selected node; `[unset]` and `[invalid]` flag configuration nodes whose
//! settings are missing or fail validation. Children keep their stored order.
//!
use crate::commands::Session;
use crate::core::error::Result;
use crate::project::node::{Node, NodeBody};
use anyhow::anyhow;
use clap::Parser;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// Connector for intermediate items in a listing.
const TEE: &str = "├── ";
/// Connector for the last item in a listing.
const ELBOW: &str = "└── ";
/// Vertical line for ongoing indentation levels.
const PIPE: &str = "│   ";
/// Indentation after the last item of a level.
const SPACER: &str = "    ";
const BOLD_START: &str = "\x1b[1m";
const BOLD_END: &str = "\x1b[0m";

/// Arguments for `cmake-creator show`.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Disable ANSI bold for folder names.
    #[arg(long)]
    plain: bool,
}

pub async fn handle_show(args: ShowArgs, project_file: Option<&Path>) -> Result<()> {
    let session = Session::open(project_file)?;
    let tree = format_tree(session.tree(), session.selected(), !args.plain)?;
    print!("{}", tree);
    if session.store.exists() {
        println!(
            "\nLast saved: {}",
            session
                .project
                .last_saved
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
        );
    } else {
        println!("\n(not saved yet)");
    }
    Ok(())
}

/// Renders the whole snapshot as a tree listing.
pub fn format_tree(tree: &[Node], selected: Option<&str>, bold: bool) -> Result<String> {
    let mut output = String::new();
    for root in tree {
        write_label(&mut output, root, selected, bold)?;
        walk(root.children(), &mut String::new(), selected, bold, &mut output)?;
    }
    Ok(output)
}

fn walk(
    nodes: &[Node],
    current_prefix: &mut String,
    selected: Option<&str>,
    bold: bool,
    output: &mut String,
) -> Result<()> {
    let count = nodes.len();
    for (index, node) in nodes.iter().enumerate() {
        let is_last = index == count - 1;
        write!(output, "{}{}", current_prefix, if is_last { ELBOW } else { TEE })
            .map_err(|e| anyhow!(e))?;
        write_label(output, node, selected, bold)?;

        if node.is_folder() {
            let prefix_component = if is_last { SPACER } else { PIPE };
            current_prefix.push_str(prefix_component);
            walk(node.children(), current_prefix, selected, bold, output)?;
            current_prefix.truncate(current_prefix.len() - prefix_component.len());
        }
    }
    Ok(())
}

fn write_label(
    output: &mut String,
    node: &Node,
    selected: Option<&str>,
    bold: bool,
) -> Result<()> {
    let mut label = match &node.body {
        NodeBody::Folder { .. } if bold => {
            format!("{}{}/{} ({})", BOLD_START, node.name, BOLD_END, node.id)
        }
        NodeBody::Folder { .. } => format!("{}/ ({})", node.name, node.id),
        NodeBody::Config { settings } => {
            let flag = match settings {
                None => " [unset]",
                Some(record) if record.validate().is_err() => " [invalid]",
                Some(_) => "",
            };
            format!("{} ({}){}", node.name, node.id, flag)
        }
    };
    if selected == Some(node.id.as_str()) {
        label.push_str(" *");
    }
    writeln!(output, "{}", label).map_err(|e| anyhow!(e))
}
