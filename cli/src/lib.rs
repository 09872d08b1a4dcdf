//! # cmake-creator
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Assemble a folder tree of CMake configuration nodes and turn each node's
//! settings into a `CMakeLists.txt`.
//!
//! - [`project`]: the tree model (schema, nodes, mutation, path resolution,
//!   persistence, export)
//! - [`core`]: configuration, errors, and the rendering engine
//! - [`common`]: filesystem and archive helpers
//! - [`commands`]: the `cmake-creator` command-line handlers
//!
//! ```rust,ignore
//! use cmake_creator::core::templating;
//! use cmake_creator::project::{mutate, node::{self, Node, ROOT_ID}, path};
//!
//! let tree = node::default_project("Project");
//! let tree = mutate::insert_under(&tree, ROOT_ID, Node::folder("src", "src"))?;
//! let cfg = Node::config("cfg", "CMakeLists.txt", record);
//! let tree = mutate::insert_under(&tree, "src", cfg)?;
//!
//! assert_eq!(path::resolve_path(&tree, "cfg"), "src/CMakeLists.txt");
//! let text = templating::render(mutate::locate(&tree, "cfg").unwrap().settings().unwrap());
//! ```
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod project;
