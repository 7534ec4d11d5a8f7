//! Buildmap
//!
//! Build-time treemap generation from Ninja build logs.
//!
//! Reads a `.ninja_log`, attributes each build step's duration to its
//! output path, aggregates the paths into a weighted prefix tree, and
//! writes webtreemap-compatible JSON.
//!
//! Run `ninja -t recompact` first to make sure no duplicate entries are
//! in the build log.
//!
//! This crate provides the core implementation for the `buildmap` CLI tool.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
