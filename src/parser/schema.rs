//! Output JSON schema definitions for treemap data.
//!
//! This module defines the structure of JSON files we write to disk,
//! matching what the webtreemap renderer consumes.

use serde::{Deserialize, Serialize};

/// A single node of the serialized treemap
///
/// Leaves carry only `name` and `data`; grouping nodes additionally carry
/// `children` and mark themselves via `data.$dominant_symbol`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreemapNode {
    /// Display label: the path segment plus a formatted duration
    pub name: String,

    /// Numeric payload read by the renderer
    pub data: TreemapData,

    /// Child nodes (grouping nodes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreemapNode>>,
}

/// Renderer payload for one node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreemapData {
    /// Area of the node's rectangle: aggregate duration in seconds
    #[serde(rename = "$area")]
    pub area: f64,

    /// Set to "node" on nodes that group children
    #[serde(rename = "$dominant_symbol", skip_serializing_if = "Option::is_none")]
    pub dominant_symbol: Option<String>,
}

impl TreemapNode {
    /// True when this node groups children
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }
}
