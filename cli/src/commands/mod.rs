//! # Command Handlers
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One submodule per top-level `cmake-creator` command (or command group). Each
//! exposes a Clap `*Args` struct and an async `handle_*` function that `main.rs`
//! dispatches to.
//!
//! Every handler works the same way: open a [`Session`] (config + saved project),
//! compute a new snapshot with the pure `project::mutate` functions, and commit it
//! back. Nothing edits a tree in place.
//!
//! | Command            | Module       |
//! |--------------------|--------------|
//! | `init`, `reset`    | [`project`]  |
//! | `show`             | [`show`]     |
//! | `node ...`         | [`node`]     |
//! | `settings ...`     | [`settings`] |
//! | `render`, `path`   | [`render`]   |
//! | `validate`         | [`validate`] |
//! | `export`           | [`export`]   |
//!
use crate::core::config::{self, Config};
use crate::core::error::{CreatorError, Result};
use crate::core::templating::{KeywordStyle, RenderOptions};
use crate::project::mutate::locate;
use crate::project::node::Node;
use crate::project::store::{ProjectStore, SavedProject};
use anyhow::Context;
use std::path::Path;
use tracing::debug;

pub mod export;
pub mod node;
pub mod project;
pub mod render;
pub mod settings;
pub mod show;
pub mod validate;

/// Loaded configuration plus the saved project it points at.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub store: ProjectStore,
    pub project: SavedProject,
}

impl Session {
    /// Loads configuration, resolves the project file, and reads the project.
    pub fn open(project_file: Option<&Path>) -> Result<Self> {
        let config = config::load_config().context("Failed to load configuration")?;
        Self::with_config(config, project_file)
    }

    pub fn with_config(config: Config, project_file: Option<&Path>) -> Result<Self> {
        let path = config.project_file(project_file)?;
        debug!("Using project file {}", path.display());
        let store = ProjectStore::new(path, config.project.root_name.clone());
        let project = store.load()?;
        Ok(Self {
            config,
            store,
            project,
        })
    }

    pub fn tree(&self) -> &[Node] {
        &self.project.tree_data
    }

    pub fn selected(&self) -> Option<&str> {
        self.project.selected_node_id.as_deref()
    }

    /// Saves `tree` with `selected` as the new selection.
    pub fn commit(&mut self, tree: Vec<Node>, selected: Option<String>) -> Result<()> {
        self.project = self.store.save(&tree, selected.as_deref())?;
        Ok(())
    }

    /// Saves `tree`, keeping the current selection when it still exists.
    pub fn commit_tree(&mut self, tree: Vec<Node>) -> Result<()> {
        let selected = self
            .selected()
            .filter(|id| locate(&tree, id).is_some())
            .map(str::to_string);
        self.commit(tree, selected)
    }

    /// The node named by `id`, or the selected node when `id` is `None`.
    pub fn target_node(&self, id: Option<&str>) -> Result<&Node> {
        let id = match id.or(self.selected()) {
            Some(id) => id,
            None => anyhow::bail!(CreatorError::Config(
                "No node id given and no node is selected (see `node select`).".to_string()
            )),
        };
        locate(self.tree(), id)
            .ok_or_else(|| CreatorError::NodeNotFound { id: id.to_string() }.into())
    }

    /// Configured render options with command-line overrides applied.
    pub fn render_options(&self, conventional: bool, trim_languages: bool) -> RenderOptions {
        let mut options = self.config.render.clone();
        if conventional {
            options.keyword_style = KeywordStyle::Conventional;
        }
        if trim_languages {
            options.trailing_language_space = false;
        }
        options
    }
}
