//! # Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used across the crate:
//! - `config`: configuration loading, merging, and validation
//! - `error`: error types and the crate-wide `Result` alias
//! - `templating`: the CMakeLists.txt rendering engine
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CreatorError, Result}; // For error handling
//! use crate::core::templating; // For rendering configuration records
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
