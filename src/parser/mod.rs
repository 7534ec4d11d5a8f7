//! Build-log parsing and schema definitions.
//!
//! This module handles:
//! - Reading the tab-separated build log
//! - Validating the header and record lines
//! - Defining the output treemap schema

pub mod ninja_log;
pub mod schema;

// Re-export main types
pub use ninja_log::{parse_log, read_log, Record};
pub use schema::{TreemapData, TreemapNode};
