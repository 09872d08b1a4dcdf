//! # TAR Archive Operations (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! Builds gzipped tarballs (`.tar.gz`) in memory from a list of directory and
//! file entries. `cmake-creator export` uses it to package the generated
//! `CMakeLists.txt` files together with the folder layout they belong to.
//!
//! ## Architecture
//!
//! The `tar` crate lays out the archive and `flate2` compresses it. Entries are
//! written in the order given, with synthetic headers (no filesystem access):
//! directories get mode `0o755`, files `0o644`, and all share one `mtime`.
//!
//! ```rust,ignore
//! let bytes = tar::create_tar_gz(
//!     [
//!         ArchiveEntry::Directory("src"),
//!         ArchiveEntry::File { path: "src/CMakeLists.txt", contents: b"..." },
//!     ],
//!     1_718_000_000,
//! )?;
//! ```
//!
use crate::core::error::{CreatorError, Result};
use anyhow::{anyhow, Context};
use tracing::debug;

/// One item to place in the archive. Paths are relative and `/`-separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveEntry<'a> {
    Directory(&'a str),
    File { path: &'a str, contents: &'a [u8] },
}

/// Creates a gzipped TAR archive holding `entries`, returning its bytes.
///
/// ## Errors
///
/// Returns an `Err` if an entry path is empty or absolute, if a header cannot be
/// written, or if finishing the tar or gzip stream fails.
pub fn create_tar_gz<'a, I>(entries: I, mtime: u64) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = ArchiveEntry<'a>>,
{
    let mut tar_gz_bytes = Vec::new();
    let enc = flate2::write::GzEncoder::new(&mut tar_gz_bytes, flate2::Compression::default());
    let mut tar_builder = tar::Builder::new(enc);

    for entry in entries {
        let (path, contents, entry_type, mode) = match entry {
            ArchiveEntry::Directory(path) => (path, &[][..], tar::EntryType::Directory, 0o755),
            ArchiveEntry::File { path, contents } => (path, contents, tar::EntryType::Regular, 0o644),
        };
        if path.is_empty() || path.starts_with('/') {
            return Err(anyhow!(CreatorError::Archive(format!(
                "Archive entry path must be relative and non-empty, got '{}'",
                path
            ))));
        }
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(entry_type);
        header.set_size(contents.len() as u64);
        header.set_mode(mode);
        header.set_mtime(mtime);
        tar_builder
            .append_data(&mut header, path, contents)
            .with_context(|| format!("Failed to add '{}' to the tar archive", path))?;
        debug!("Archived {:?} '{}' ({} bytes)", entry_type, path, contents.len());
    }

    let encoder = tar_builder
        .into_inner()
        .context("Failed to finalize tar archive structure")?;
    encoder
        .finish()
        .context("Failed to finish gzip compression stream")?;

    Ok(tar_gz_bytes)
}
