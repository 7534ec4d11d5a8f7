//! Conversion of the aggregation tree into webtreemap nodes.
//!
//! Labels embed a human-readable duration next to the path segment, and
//! grouping nodes are marked so the renderer can distinguish them.

use crate::aggregator::tree::TreeNode;
use crate::parser::schema::{TreemapData, TreemapNode};

/// Convert a finished tree into the serializable treemap form
///
/// **Public** - main entry point for serialization
///
/// Children are emitted sorted by segment name so output is deterministic
/// and diffable across runs.
pub fn to_treemap(node: &TreeNode, label: &str) -> TreemapNode {
    let mut out = TreemapNode {
        name: format!("'{}' {}", label, format_duration(node.weight)),
        data: TreemapData {
            area: node.weight,
            dominant_symbol: None,
        },
        children: None,
    };

    if !node.children.is_empty() {
        let mut entries: Vec<(&String, &TreeNode)> = node.children.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        out.children = Some(
            entries
                .into_iter()
                .map(|(segment, child)| to_treemap(child, segment))
                .collect(),
        );
        out.data.dominant_symbol = Some("node".to_string());
    }

    out
}

/// Format a duration in seconds into a human-readable string
///
/// `3.2s`, `2m5.0s`, `1h2m5.0s`
pub fn format_duration(t: f64) -> String {
    if t < 60.0 {
        format!("{:.1}s", t)
    } else if t < 60.0 * 60.0 {
        format!("{}m{:.1}s", (t / 60.0) as u64, t % 60.0)
    } else {
        format!(
            "{}h{}m{:.1}s",
            (t / 3600.0) as u64,
            ((t % 3600.0) / 60.0) as u64,
            t % 60.0
        )
    }
}
