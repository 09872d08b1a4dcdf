//! # CMake Creator Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads, merges and validates the settings that shape how projects are created,
//! rendered, stored and exported. Nothing here touches the project tree itself.
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.cmake-creator.toml` in the current directory or an ancestor
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `<config dir>/cmake-creator/config.toml`
//! 3. Default values defined in the code
//!
//! ## Example
//!
//! ```toml
//! [project]
//! root_name = "MyRepo"
//! root_label = "(top level)"
//! default_tool_version = "3.28"
//!
//! [render]
//! keyword_style = "conventional"
//! trailing_language_space = false
//!
//! [storage]
//! project_file = "~/cmake/project.json"
//!
//! [export]
//! archive_name = "my-repo-cmake"
//! ```
//!
use crate::core::error::{CreatorError, Result};
use crate::core::templating::RenderOptions;
use crate::project::node::DEFAULT_ROOT_NAME;
use crate::project::path::DEFAULT_ROOT_LABEL;
use crate::project::schema::{ConfigurationRecord, DEFAULT_TOOL_VERSION};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub render: RenderOptions,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Defaults applied when creating projects and nodes.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Name of the synthetic root folder of a new project.
    #[serde(default = "default_root_name")]
    pub root_name: String,
    /// Shown as the parent directory name of top-level nodes.
    #[serde(default = "default_root_label")]
    pub root_label: String,
    #[serde(default = "default_folder_name")]
    pub default_folder_name: String,
    #[serde(default = "default_config_name")]
    pub default_config_name: String,
    /// Version placed in the settings of a new configuration node.
    #[serde(default = "default_tool_version")]
    pub default_tool_version: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            root_label: default_root_label(),
            default_folder_name: default_folder_name(),
            default_config_name: default_config_name(),
            default_tool_version: default_tool_version(),
        }
    }
}

/// Where the working project is saved.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Project file path (can use ~). Falls back to the platform data directory.
    pub project_file: Option<String>,
}

/// Export archive settings.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// File stem of the archive written by `export`.
    #[serde(default = "default_archive_name")]
    pub archive_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            archive_name: default_archive_name(),
        }
    }
}

fn default_root_name() -> String {
    DEFAULT_ROOT_NAME.to_string()
}
fn default_root_label() -> String {
    DEFAULT_ROOT_LABEL.to_string()
}
fn default_folder_name() -> String {
    "New Folder".to_string()
}
fn default_config_name() -> String {
    "CMakeLists.txt".to_string()
}
fn default_tool_version() -> String {
    DEFAULT_TOOL_VERSION.to_string()
}
fn default_archive_name() -> String {
    "cmake-project".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".cmake-creator.toml";
const DEFAULT_PROJECT_FILENAME: &str = "project.json";

impl Config {
    /// Resolves the project file: explicit override, then `storage.project_file`,
    /// then `<data dir>/project.json`.
    pub fn project_file(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.storage.project_file {
            return Ok(PathBuf::from(path));
        }
        let proj_dirs = ProjectDirs::from("com", "CMakeCreator", "cmake-creator")
            .ok_or_else(|| {
                anyhow!(CreatorError::Config(
                    "Could not determine a data directory; pass --project <PATH>.".to_string()
                ))
            })?;
        Ok(proj_dirs.data_dir().join(DEFAULT_PROJECT_FILENAME))
    }
}

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "CMakeCreator", "cmake-creator") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win over user values whenever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let pick = |project: String, user: String, default: &str| {
        if project != default {
            project
        } else {
            user
        }
    };
    Config {
        project: ProjectConfig {
            root_name: pick(
                project_cfg.project.root_name,
                user.project.root_name,
                &defaults.project.root_name,
            ),
            root_label: pick(
                project_cfg.project.root_label,
                user.project.root_label,
                &defaults.project.root_label,
            ),
            default_folder_name: pick(
                project_cfg.project.default_folder_name,
                user.project.default_folder_name,
                &defaults.project.default_folder_name,
            ),
            default_config_name: pick(
                project_cfg.project.default_config_name,
                user.project.default_config_name,
                &defaults.project.default_config_name,
            ),
            default_tool_version: pick(
                project_cfg.project.default_tool_version,
                user.project.default_tool_version,
                &defaults.project.default_tool_version,
            ),
        },
        render: RenderOptions {
            keyword_style: if project_cfg.render.keyword_style != defaults.render.keyword_style {
                project_cfg.render.keyword_style
            } else {
                user.render.keyword_style
            },
            trailing_language_space: if project_cfg.render.trailing_language_space
                != defaults.render.trailing_language_space
            {
                project_cfg.render.trailing_language_space
            } else {
                user.render.trailing_language_space
            },
        },
        storage: StorageConfig {
            project_file: project_cfg.storage.project_file.or(user.storage.project_file),
        },
        export: ExportConfig {
            archive_name: pick(
                project_cfg.export.archive_name,
                user.export.archive_name,
                &defaults.export.archive_name,
            ),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(project_file) = &config.storage.project_file {
        let expanded = shellexpand::tilde(project_file).into_owned();
        debug!("Expanded project file path: {}", expanded);
        config.storage.project_file = Some(expanded);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    let probe = ConfigurationRecord {
        project_name: "probe".to_string(),
        ..ConfigurationRecord::new_default(config.project.default_tool_version.clone())
    };
    if let Err(errors) = probe.validate() {
        return Err(anyhow!(CreatorError::Config(format!(
            "Invalid project.default_tool_version '{}': {}",
            config.project.default_tool_version, errors
        ))));
    }
    for (key, value) in [
        ("project.root_name", &config.project.root_name),
        ("project.default_folder_name", &config.project.default_folder_name),
        ("project.default_config_name", &config.project.default_config_name),
        ("export.archive_name", &config.export.archive_name),
    ] {
        if value.trim().is_empty() {
            return Err(anyhow!(CreatorError::Config(format!(
                "'{}' cannot be empty.",
                key
            ))));
        }
    }
    if let Some(project_file) = &config.storage.project_file {
        let path = PathBuf::from(project_file);
        if path.is_dir() {
            return Err(anyhow!(CreatorError::Config(format!(
                "Configured project file '{}' is a directory.",
                path.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
