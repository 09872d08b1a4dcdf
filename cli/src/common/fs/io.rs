//! # Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the project store and the exporter.
//! Each one attaches the offending path to its error via `anyhow::Context`.
//!
//! - **`ensure_dir_exists`**: `mkdir -p`, failing if the path is a file.
//! - **`read_file_to_string`**: reads a whole UTF-8 file.
//! - **`write_bytes_to_file`**: writes through a sibling `*.tmp` file and renames it into
//!   place, so an interrupted save never leaves a half-written project file behind.
//! - **`write_string_to_file`**: string convenience over `write_bytes_to_file`.
//!
use crate::core::error::{CreatorError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating parents as needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(CreatorError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes `content` to `path`, replacing any existing file.
///
/// The parent directory is created first. Data goes to `<path>.tmp` and is then
/// renamed over `path`.
pub fn write_bytes_to_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    if path.is_dir() {
        anyhow::bail!(CreatorError::FileSystem(format!(
            "Cannot write file, path is a directory: {:?}",
            path
        )));
    }
    let temp_path = temp_path_for(path);
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to file {:?}", temp_path))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move {:?} into place at {:?}", temp_path, path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

/// Writes string content to `path`, replacing any existing file.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    write_bytes_to_file(path, content.as_bytes())
}
