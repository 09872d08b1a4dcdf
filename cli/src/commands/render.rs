//! # Render and Path Commands
//!
//! File: cli/src/commands/render.rs
//!
//! ## Overview
//!
//! `cmake-creator render [ID]` prints the `CMakeLists.txt` text generated from a
//! configuration node's settings (the selected node when ID is omitted). Settings
//! that fail validation are still rendered; a warning lists the problems.
//!
//! `cmake-creator path <ID>` prints where a node lives in the project:
//!
//! ```text
//! path: src/CMakeLists.txt
//! directory: src
//! parent: src
//! ```
//!
use crate::commands::Session;
use crate::common::fs::io;
use crate::core::error::{CreatorError, Result};
use crate::core::templating;
use crate::project::path::{directory_of, parent_directory_name, resolve_path};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Arguments for `cmake-creator render`.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Configuration node id (defaults to the selected node).
    id: Option<String>,
    /// Emit `add_executable` / `add_library(NAME STATIC|SHARED|INTERFACE)`.
    #[arg(long)]
    conventional: bool,
    /// Drop the space after the last language in `project(...)`.
    #[arg(long)]
    trim_languages: bool,
    /// Write to this file instead of stdout.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

/// Arguments for `cmake-creator path`.
#[derive(Parser, Debug)]
pub struct PathArgs {
    id: String,
}

pub async fn handle_render(args: RenderArgs, project_file: Option<&Path>) -> Result<()> {
    let session = Session::open(project_file)?;
    let node = session.target_node(args.id.as_deref())?;
    if node.is_folder() {
        anyhow::bail!(CreatorError::NotAConfig {
            id: node.id.clone()
        });
    }
    let settings = node
        .settings()
        .ok_or_else(|| CreatorError::MissingSettings {
            id: node.id.clone(),
        })?;
    if let Err(errors) = settings.validate() {
        warn!("Settings of '{}' are incomplete:\n{}", node.id, errors);
    }

    let options = session.render_options(args.conventional, args.trim_languages);
    let text = templating::render_with_options(settings, &options);
    match args.output {
        Some(path) => {
            io::write_string_to_file(&path, &text)?;
            info!("Wrote {}", path.display());
            println!("Wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

pub async fn handle_path(args: PathArgs, project_file: Option<&Path>) -> Result<()> {
    let session = Session::open(project_file)?;
    let tree = session.tree();
    let path = resolve_path(tree, &args.id);
    if path.is_empty() {
        anyhow::bail!(CreatorError::NodeNotFound { id: args.id });
    }
    println!("path: {}", path);
    println!("directory: {}", directory_of(tree, &args.id));
    println!(
        "parent: {}",
        parent_directory_name(tree, &args.id, &session.config.project.root_label)
    );
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_render_flags() {
        let args =
            RenderArgs::try_parse_from(["render", "cfg", "--conventional", "--trim-languages"])
                .unwrap();
        assert_eq!(args.id.as_deref(), Some("cfg"));
        assert!(args.conventional);
        assert!(args.trim_languages);
        assert!(args.output.is_none());

        let args = RenderArgs::try_parse_from(["render"]).unwrap();
        assert!(args.id.is_none());
        assert!(!args.conventional);
    }

    #[test]
    fn test_path_requires_id() {
        assert!(PathArgs::try_parse_from(["path"]).is_err());
    }
}
