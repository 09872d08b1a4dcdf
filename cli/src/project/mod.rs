//! # Project Tree Model
//!
//! File: cli/src/project/mod.rs
//!
//! ## Overview
//!
//! Everything about the hierarchical CMake project a user assembles:
//!
//! - `schema`: configuration/target records and their validation
//! - `node`: folder/config nodes, the default project factory, id generation
//! - `mutate`: pure locate/replace/insert/remove over snapshots
//! - `path`: node locations relative to the project root
//! - `store`: saving and loading the working project
//! - `export`: flattening a snapshot into packaged files
//!
//! The first four are pure and synchronous; only `store` and `export` do I/O,
//! and only through `common::fs` / `common::archive`.
//!
pub mod export;
pub mod mutate;
pub mod node;
pub mod path;
pub mod schema;
pub mod store;
