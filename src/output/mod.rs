//! Output writers for treemap data.
//!
//! This module handles:
//! - Converting the aggregation tree into webtreemap nodes
//! - Writing JSON to files or stdout
//! - Reading treemaps back for validation

pub mod json;
pub mod treemap;

// Re-export main functions
pub use json::{read_treemap, write_treemap, write_treemap_stdout};
pub use treemap::{format_duration, to_treemap};
