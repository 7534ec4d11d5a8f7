use crate::output::{format_duration, read_treemap};
use crate::parser::schema::TreemapNode;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a treemap JSON file
pub fn validate_treemap_file(file_path: PathBuf) -> Result<()> {
    println!("Validating treemap: {}", file_path.display());

    let treemap = read_treemap(&file_path)?;
    let stats = walk(&treemap, 0);

    if stats.underweight_groups > 0 {
        anyhow::bail!(
            "{} grouping node(s) weigh less than their children",
            stats.underweight_groups
        );
    }

    println!("✓ Valid treemap JSON");
    println!("  Root:  {}", treemap.name);
    println!("  Nodes: {}", stats.node_count);
    println!("  Depth: {}", stats.max_depth);
    println!("  Total: {}", format_duration(treemap.data.area));

    Ok(())
}

struct WalkStats {
    node_count: usize,
    max_depth: usize,
    underweight_groups: usize,
}

/// Walk a treemap collecting structural stats
///
/// A grouping node's area must cover at least its children's sum; nodes
/// that absorbed name collisions legitimately weigh more.
fn walk(node: &TreemapNode, depth: usize) -> WalkStats {
    let mut stats = WalkStats {
        node_count: 1,
        max_depth: depth,
        underweight_groups: 0,
    };

    if let Some(children) = &node.children {
        let children_area: f64 = children.iter().map(|c| c.data.area).sum();
        if node.data.area + 1e-6 < children_area {
            stats.underweight_groups += 1;
        }

        for child in children {
            let child_stats = walk(child, depth + 1);
            stats.node_count += child_stats.node_count;
            stats.max_depth = stats.max_depth.max(child_stats.max_depth);
            stats.underweight_groups += child_stats.underweight_groups;
        }
    }

    stats
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Buildmap Treemap Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure (per node):");
        println!("  name: string              - Path segment plus formatted duration");
        println!("  data: object              - Renderer payload");
        println!("    $area: number           - Aggregate duration in seconds");
        println!("    $dominant_symbol: 'node' - Present on grouping nodes only");
        println!("  children: array?          - Child nodes (grouping nodes only)");
        println!();
        println!("The root node is labeled 'everything'.");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Buildmap v{}", env!("CARGO_PKG_VERSION"));
    println!("Treemap Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Build-time treemap generation from Ninja build logs.");
}
