//! # Project Lifecycle Commands
//!
//! File: cli/src/commands/project.rs
//!
//! `cmake-creator init` creates a new saved project; `cmake-creator reset`
//! throws the current one away and starts over from an empty root.
//!
//! ```bash
//! cmake-creator --project ./cmake.json init
//! cmake-creator reset
//! ```
//!
use crate::commands::Session;
use crate::core::error::Result;
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

/// Arguments for `cmake-creator init`.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing project file.
    #[arg(long, short = 'f')]
    force: bool,
}

/// Arguments for `cmake-creator reset`.
#[derive(Parser, Debug)]
pub struct ResetArgs {}

pub async fn handle_init(args: InitArgs, project_file: Option<&Path>) -> Result<()> {
    let session = Session::open(project_file)?;
    if session.store.exists() {
        if !args.force {
            anyhow::bail!(
                "A project already exists at '{}'. Use --force to start over.",
                session.store.path().display()
            );
        }
        warn!(
            "Overwriting existing project at '{}' due to --force.",
            session.store.path().display()
        );
    }
    session.store.reset()?;
    info!("Initialized project at {}", session.store.path().display());
    println!(
        "Initialized empty project '{}' at {}",
        session.config.project.root_name,
        session.store.path().display()
    );
    Ok(())
}

pub async fn handle_reset(_args: ResetArgs, project_file: Option<&Path>) -> Result<()> {
    let session = Session::open(project_file)?;
    let had_content = session.store.has_saved_project()?;
    session.store.reset()?;
    if had_content {
        println!("Project reset; all folders and configuration nodes were removed.");
    } else {
        println!("Project reset.");
    }
    Ok(())
}
