//! # Settings Command Group
//!
//! File: cli/src/commands/settings.rs
//!
//! `cmake-creator settings set <ID> <FILE>` replaces a configuration node's
//! settings with the record in FILE (`.json` is read as JSON, anything else as
//! TOML). The record must pass validation before it is saved.
//!
//! `cmake-creator settings show [ID]` prints the stored record as JSON.
//!
//! A TOML settings file looks like:
//!
//! ```toml
//! cmakeVersion = "3.29"
//! projectName = "MyApp"
//! languages = ["CXX"]
//! options = ["-Wall"]
//!
//! [[targets]]
//! name = "app"
//! kind = "executable"
//! sources = ["main.cpp"]
//! linkLibs = ["fmt"]
//! ```
//!
use crate::commands::Session;
use crate::common::fs::io;
use crate::core::error::{CreatorError, Result};
use crate::project::mutate;
use crate::project::schema::ConfigurationRecord;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Replace a configuration node's settings with the record in FILE.
    Set(SetArgs),
    /// Print a configuration node's settings as JSON.
    Show(ShowArgs),
}

#[derive(Parser, Debug)]
struct SetArgs {
    /// Configuration node id.
    id: String,
    /// TOML or JSON file holding the record.
    file: PathBuf,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Configuration node id (defaults to the selected node).
    id: Option<String>,
}

pub async fn handle_settings(args: SettingsArgs, project_file: Option<&Path>) -> Result<()> {
    let mut session = Session::open(project_file)?;
    match args.command {
        SettingsCommand::Set(set) => {
            let record = read_record(&set.file)?;
            record.validate().map_err(CreatorError::Validation)?;
            let tree = mutate::update_settings(session.tree(), &set.id, record)?;
            session.commit_tree(tree)?;
            info!("Updated settings of '{}'", set.id);
            println!("Settings of '{}' updated.", set.id);
        }
        SettingsCommand::Show(show) => {
            let node = session.target_node(show.id.as_deref())?;
            if node.is_folder() {
                anyhow::bail!(CreatorError::NotAConfig {
                    id: node.id.clone()
                });
            }
            let settings = node.settings().ok_or_else(|| CreatorError::MissingSettings {
                id: node.id.clone(),
            })?;
            let json =
                serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
            println!("{}", json);
        }
    }
    Ok(())
}

/// Reads a record from `path`, choosing the format by extension.
fn read_record(path: &Path) -> Result<ConfigurationRecord> {
    let content = io::read_file_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    debug!(
        "Parsing settings from {} as {}",
        path.display(),
        if is_json { "JSON" } else { "TOML" }
    );
    let record = if is_json {
        ConfigurationRecord::from_json_str(&content)
            .with_context(|| format!("Failed to parse JSON settings {}", path.display()))?
    } else {
        ConfigurationRecord::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML settings {}", path.display()))?
    };
    Ok(record)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::schema::{Language, TargetKind};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_record_from_toml() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            r#"
cmakeVersion = "3.29"
projectName = "MyApp"
languages = ["C", "CXX"]

[[targets]]
name = "app"
kind = "executable"
sources = ["main.cpp"]
"#,
        )?;
        let record = read_record(&path)?;
        assert_eq!(record.project_name, "MyApp");
        assert_eq!(record.languages, vec![Language::C, Language::Cxx]);
        assert_eq!(record.targets[0].kind, TargetKind::Executable);
        assert!(record.options.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_record_from_json() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("settings.JSON");
        fs::write(
            &path,
            r#"{ "cmakeVersion": "3.20", "projectName": "Lib", "languages": ["CUDA"] }"#,
        )?;
        let record = read_record(&path)?;
        assert_eq!(record.tool_version, "3.20");
        assert_eq!(record.languages, vec![Language::Cuda]);
        Ok(())
    }

    #[test]
    fn test_read_record_reports_parse_errors() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.toml");
        fs::write(&path, "cmakeVersion = ")?;
        let err = read_record(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML settings"));
        Ok(())
    }
}
