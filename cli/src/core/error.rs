//! # CMake Creator Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout cmake-creator. Domain
//! failures are variants of [`CreatorError`]; everything is carried through the
//! application as `anyhow::Error` so call sites can attach context.
//!
//! ## Architecture
//!
//! - `CreatorError`: a `thiserror` enum covering configuration, filesystem,
//!   templating, validation, tree-editing and archive failures.
//! - `Result<T>`: alias for `anyhow::Result<T>`.
//!
//! "Not found" is deliberately *not* an error for the pure tree API
//! (`locate`, `replace`, `remove`, `resolve_path`); those report absence with
//! `Option`, a no-op, or an empty string. The variants below are raised only by
//! the hardened editing operations and the CLI.
//!
//! ## Examples
//!
//! ```rust,ignore
//! match project::mutate::delete_node(&tree, "root") {
//!     Err(e) if matches!(e.downcast_ref::<CreatorError>(), Some(CreatorError::RootProtected)) => {
//!         println!("The project root cannot be removed.");
//!     }
//!     other => { /* ... */ }
//! }
//! ```
//!
use crate::project::schema::ValidationErrors;
use thiserror::Error;

/// Custom error type for cmake-creator.
#[derive(Error, Debug)]
pub enum CreatorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Validation failed:\n{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Node '{id}' not found.")]
    NodeNotFound { id: String },

    #[error("Node '{id}' is not a folder and cannot hold children.")]
    NotAFolder { id: String },

    #[error("Node '{id}' is not a CMake configuration node.")]
    NotAConfig { id: String },

    #[error("Node id '{id}' is already used in this project.")]
    DuplicateId { id: String },

    #[error("Inserting '{id}' would make it its own ancestor.")]
    CycleDetected { id: String },

    #[error("The project root node cannot be removed.")]
    RootProtected,

    #[error("Invalid node name: {0}")]
    InvalidName(String),

    #[error("Node '{id}' has no CMake settings yet.")]
    MissingSettings { id: String },

    #[error("Archive error: {0}")]
    Archive(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::schema::FieldError;

    #[test]
    fn test_error_display() {
        let config_err = CreatorError::Config("Missing setting 'foo'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'foo'"
        );

        let not_found = CreatorError::NodeNotFound {
            id: "folder-1".into(),
        };
        assert_eq!(not_found.to_string(), "Node 'folder-1' not found.");

        assert_eq!(
            CreatorError::RootProtected.to_string(),
            "The project root node cannot be removed."
        );
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let errors = ValidationErrors(vec![
            FieldError::new("projectName", "Project name is required"),
            FieldError::new("languages", "Select at least one language"),
        ]);
        let message = CreatorError::from(errors).to_string();
        assert!(message.starts_with("Validation failed:"));
        assert!(message.contains("projectName: Project name is required"));
        assert!(message.contains("languages: Select at least one language"));
    }
}
