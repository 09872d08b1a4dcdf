//! # Project Export
//!
//! File: cli/src/project/export.rs
//!
//! ## Overview
//!
//! Flattens a snapshot into what a packaged project contains: one directory entry
//! per folder and one file entry per configuration node, each at its path relative
//! to the project root, files carrying their rendered `CMakeLists.txt` text.
//!
//! - The synthetic root (`id == "root"`) contributes no entry of its own; its
//!   children are placed at the top of the archive.
//! - Configuration nodes that have never been given settings are skipped.
//! - Entries follow pre-order, so a directory always precedes its contents.
//!
use crate::common::archive::tar::{self, ArchiveEntry};
use crate::core::error::Result;
use crate::core::templating::{self, RenderOptions};
use crate::project::node::{Node, NodeBody, ROOT_ID};
use anyhow::Context;
use tracing::{debug, info, warn};

/// What is stored at an [`ExportEntry`]'s path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportContent {
    Directory,
    File(String),
}

/// One packaged item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub path: String,
    pub content: ExportContent,
}

/// Collects the export entries of `tree`, rendering every configured node.
pub fn collect_entries(tree: &[Node], options: &RenderOptions) -> Vec<ExportEntry> {
    let mut entries = Vec::new();
    for node in tree {
        if node.id == ROOT_ID {
            for child in node.children() {
                visit(child, "", options, &mut entries);
            }
        } else {
            visit(node, "", options, &mut entries);
        }
    }
    entries
}

fn visit(node: &Node, parent_path: &str, options: &RenderOptions, out: &mut Vec<ExportEntry>) {
    let path = if parent_path.is_empty() {
        node.name.clone()
    } else {
        format!("{}/{}", parent_path, node.name)
    };
    match &node.body {
        NodeBody::Folder { children } => {
            out.push(ExportEntry {
                path: path.clone(),
                content: ExportContent::Directory,
            });
            for child in children {
                visit(child, &path, options, out);
            }
        }
        NodeBody::Config {
            settings: Some(settings),
        } => {
            if let Err(errors) = settings.validate() {
                warn!("Exporting '{}' with invalid settings:\n{}", path, errors);
            }
            let text = templating::render_with_options(settings, options);
            out.push(ExportEntry {
                path,
                content: ExportContent::File(text),
            });
        }
        NodeBody::Config { settings: None } => {
            debug!("Skipping '{}': no settings yet", path);
        }
    }
}

/// Packages `tree` as a gzipped tarball.
pub fn build_archive(tree: &[Node], options: &RenderOptions, mtime: u64) -> Result<Vec<u8>> {
    let entries = collect_entries(tree, options);
    info!("Packaging {} entries", entries.len());
    let archive_entries = entries.iter().map(|entry| match &entry.content {
        ExportContent::Directory => ArchiveEntry::Directory(&entry.path),
        ExportContent::File(text) => ArchiveEntry::File {
            path: &entry.path,
            contents: text.as_bytes(),
        },
    });
    tar::create_tar_gz(archive_entries, mtime).context("Failed to build project archive")
}
