//! # CMake Configuration Schema
//!
//! File: cli/src/project/schema.rs
//!
//! ## Overview
//!
//! Data definitions for the settings held by a CMake configuration node:
//! a [`ConfigurationRecord`] (tool version, project name, languages, targets,
//! global compile options) and its [`TargetRecord`]s.
//!
//! The serialized field names (`cmakeVersion`, `projectName`, `includeDirs`, ...)
//! match the project files written by the browser editor, so saved trees
//! round-trip between the two.
//!
//! ## Validation
//!
//! [`ConfigurationRecord::validate`] checks the record without transforming it and
//! reports *every* failing field as a [`FieldError`] carrying the serialized field
//! path (`targets[1].name`). Validation never panics and never short-circuits.
//!
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static TOOL_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("tool version pattern is valid"));

/// Version a freshly created configuration node starts with.
pub const DEFAULT_TOOL_VERSION: &str = "3.29";

/// Languages accepted by `project(... LANGUAGES ...)`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    C,
    #[serde(rename = "CXX")]
    Cxx,
    #[serde(rename = "CUDA")]
    Cuda,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::C => "C",
            Language::Cxx => "CXX",
            Language::Cuda => "CUDA",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of build target a [`TargetRecord`] declares.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Executable,
    Static,
    Shared,
    Interface,
}

impl TargetKind {
    /// The literal tag, as stored and as substituted into `add_<kind>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Executable => "executable",
            TargetKind::Static => "static",
            TargetKind::Shared => "shared",
            TargetKind::Interface => "interface",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings of a single build target.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetRecord {
    pub name: String,
    pub kind: TargetKind,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub include_dirs: Vec<String>,
    #[serde(default)]
    pub link_libs: Vec<String>,
    #[serde(default)]
    pub compile_defs: Vec<String>,
}

impl TargetRecord {
    /// A target with the given name and kind and all lists empty.
    pub fn new(name: impl Into<String>, kind: TargetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            sources: Vec::new(),
            include_dirs: Vec::new(),
            link_libs: Vec::new(),
            compile_defs: Vec::new(),
        }
    }
}

/// Settings of one `CMakeLists.txt`-generating node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRecord {
    #[serde(rename = "cmakeVersion")]
    pub tool_version: String,
    pub project_name: String,
    pub languages: Vec<Language>,
    #[serde(default)]
    pub targets: Vec<TargetRecord>,
    #[serde(default)]
    pub options: Vec<String>,
}

impl ConfigurationRecord {
    /// Record given to a newly created configuration node.
    ///
    /// The project name starts empty, so the record only becomes valid once the
    /// user has filled it in.
    pub fn new_default(tool_version: impl Into<String>) -> Self {
        Self {
            tool_version: tool_version.into(),
            project_name: String::new(),
            languages: vec![Language::Cxx],
            targets: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Checks the record against the schema, collecting every failing field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.tool_version.is_empty() {
            errors.push(FieldError::new("cmakeVersion", "CMake version is required"));
        } else if !TOOL_VERSION_RE.is_match(&self.tool_version) {
            errors.push(FieldError::new(
                "cmakeVersion",
                "Invalid version format (e.g. 3.29)",
            ));
        }
        if self.project_name.is_empty() {
            errors.push(FieldError::new("projectName", "Project name is required"));
        }
        if self.languages.is_empty() {
            errors.push(FieldError::new(
                "languages",
                "Select at least one language",
            ));
        }
        for (index, target) in self.targets.iter().enumerate() {
            if target.name.is_empty() {
                errors.push(FieldError::new(
                    format!("targets[{}].name", index),
                    "Target name is required",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Parses a record from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parses a record from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// One schema violation, addressed by its serialized field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// All violations found in one record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Whether any violation is reported for `path`.
    pub fn has_field(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        f.write_str(&lines.join("\n"))
    }
}
