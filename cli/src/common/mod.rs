//! # Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared, domain-agnostic helpers. Nothing in here knows about project trees or
//! CMake; `project::store` and `project::export` build on these.
//!
//! - **`archive`**: in-memory `.tar.gz` creation.
//! - **`fs`**: file reads and (atomic) writes with contextual errors.
//!

/// Utilities for building archive files.
pub mod archive;
/// Utilities for filesystem operations.
pub mod fs;
