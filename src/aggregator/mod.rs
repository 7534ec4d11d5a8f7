//! Aggregation of build records into a weighted path tree.
//!
//! This module transforms raw build records into:
//! - A filtered stream of (display path, duration) pairs
//! - A weighted prefix tree (for treemap serialization)
//! - Slow-path rankings and duration statistics

pub mod filter;
pub mod metrics;
pub mod tree;

// Re-export main types and functions
pub use filter::{filter_records, rewrite_path, RecordFilter};
pub use metrics::{calculate_duration_distribution, collect_slow_paths, DurationDistribution, SlowPath};
pub use tree::TreeNode;
