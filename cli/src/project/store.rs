//! # Project Store
//!
//! File: cli/src/project/store.rs
//!
//! ## Overview
//!
//! Keeps the working project between CLI invocations: the current snapshot, the
//! selected node, and when it was last saved. The file is pretty-printed JSON in
//! the same shape the browser editor keeps in local storage:
//!
//! ```json
//! {
//!   "treeData": [ { "id": "root", "name": "Project", "type": "folder", "children": [] } ],
//!   "selectedNodeId": "cmake-1718000000000",
//!   "lastSaved": "2024-06-10T08:00:00Z",
//!   "version": "1.0.0"
//! }
//! ```
//!
//! A missing file is not an error: loading yields a fresh default project.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use crate::project::mutate::locate;
use crate::project::node::{default_project, Node};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Format version written into every saved project.
pub const CURRENT_VERSION: &str = "1.0.0";

/// On-disk form of a project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedProject {
    pub tree_data: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_node_id: Option<String>,
    pub last_saved: DateTime<Utc>,
    pub version: String,
}

impl SavedProject {
    /// A new, empty project stamped with the current time.
    pub fn fresh(root_name: &str) -> Self {
        Self {
            tree_data: default_project(root_name),
            selected_node_id: None,
            last_saved: Utc::now(),
            version: CURRENT_VERSION.to_string(),
        }
    }

    /// True once the project root holds at least one node.
    pub fn has_content(&self) -> bool {
        self.tree_data
            .first()
            .is_some_and(|root| !root.children().is_empty())
    }
}

/// A project file on disk.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    path: PathBuf,
    root_name: String,
}

impl ProjectStore {
    /// `root_name` names the root folder whenever a fresh project is created.
    pub fn new(path: impl Into<PathBuf>, root_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            root_name: root_name.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Loads the saved project, or a fresh one when nothing has been saved yet.
    ///
    /// A selected id that no longer exists in the tree is dropped.
    pub fn load(&self) -> Result<SavedProject> {
        if !self.exists() {
            debug!(
                "No saved project at {}, starting from the default project",
                self.path.display()
            );
            return Ok(SavedProject::fresh(&self.root_name));
        }
        let content = io::read_file_to_string(&self.path)?;
        let mut project: SavedProject = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse project file {}", self.path.display()))?;
        if project.version != CURRENT_VERSION {
            warn!(
                "Project version mismatch: {} vs {}",
                project.version, CURRENT_VERSION
            );
        }
        if let Some(selected) = &project.selected_node_id {
            if locate(&project.tree_data, selected).is_none() {
                warn!("Selected node '{}' no longer exists; clearing selection", selected);
                project.selected_node_id = None;
            }
        }
        debug!("Loaded project from {}", self.path.display());
        Ok(project)
    }

    /// Saves `tree` and the selection, stamping the current time.
    pub fn save(&self, tree: &[Node], selected_node_id: Option<&str>) -> Result<SavedProject> {
        let project = SavedProject {
            tree_data: tree.to_vec(),
            selected_node_id: selected_node_id.map(str::to_string),
            last_saved: Utc::now(),
            version: CURRENT_VERSION.to_string(),
        };
        let json = serde_json::to_string_pretty(&project).context("Failed to serialize project")?;
        io::write_string_to_file(&self.path, &json)?;
        info!("Saved project to {}", self.path.display());
        Ok(project)
    }

    /// Replaces whatever is saved with a fresh default project.
    pub fn reset(&self) -> Result<SavedProject> {
        let fresh = SavedProject::fresh(&self.root_name);
        self.save(&fresh.tree_data, None)
    }

    /// True when a saved project exists and its root holds at least one node.
    pub fn has_saved_project(&self) -> Result<bool> {
        if !self.exists() {
            return Ok(false);
        }
        Ok(self.load()?.has_content())
    }

    /// When the project was last saved, if it ever was.
    pub fn last_saved(&self) -> Result<Option<DateTime<Utc>>> {
        if !self.exists() {
            return Ok(None);
        }
        Ok(Some(self.load()?.last_saved))
    }
}
