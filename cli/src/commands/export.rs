//! # Export Command
//!
//! File: cli/src/commands/export.rs
//!
//! `cmake-creator export` packages the project as a `.tar.gz`: every folder
//! becomes a directory, every configured node a rendered `CMakeLists.txt`. The
//! project root's children sit at the top of the archive.
//!
//! ```bash
//! cmake-creator export                     # ./cmake-project.tar.gz
//! cmake-creator export -o dist/app.tar.gz --conventional
//! ```
//!
use crate::commands::Session;
use crate::common::fs::io;
use crate::core::error::Result;
use crate::project::export::build_archive;
use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments for `cmake-creator export`.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Archive path (default: `<export.archive_name>.tar.gz` in the current directory).
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    /// Emit `add_executable` / `add_library(NAME STATIC|SHARED|INTERFACE)`.
    #[arg(long)]
    conventional: bool,
    /// Drop the space after the last language in `project(...)`.
    #[arg(long)]
    trim_languages: bool,
}

pub async fn handle_export(args: ExportArgs, project_file: Option<&Path>) -> Result<()> {
    let session = Session::open(project_file)?;
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let output = match args.output {
        Some(path) if path.is_absolute() => path,
        Some(path) => current_dir.join(path),
        None => current_dir.join(format!("{}.tar.gz", session.config.export.archive_name)),
    };

    let options = session.render_options(args.conventional, args.trim_languages);
    let mtime = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
    let bytes = build_archive(session.tree(), &options, mtime)?;
    if let Some(parent) = output.parent() {
        io::ensure_dir_exists(parent)?;
    }
    io::write_bytes_to_file(&output, &bytes)?;

    info!("Exported project to {}", output.display());
    let shown = pathdiff::diff_paths(&output, &current_dir).unwrap_or_else(|| output.clone());
    println!("Exported project to {} ({} bytes)", shown.display(), bytes.len());
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_output_flag() {
        let args = ExportArgs::try_parse_from(["export", "-o", "out/app.tar.gz"]).unwrap();
        assert_eq!(args.output, Some(PathBuf::from("out/app.tar.gz")));
        let args = ExportArgs::try_parse_from(["export"]).unwrap();
        assert!(args.output.is_none());
    }
}
