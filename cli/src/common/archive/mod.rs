//! # Archive Utilities (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! Archive builders used when exporting a project. Only gzipped tarballs are
//! produced at the moment (see [`tar`]).
//!

pub mod tar;
