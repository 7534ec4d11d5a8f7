//! Summary statistics over the aggregated tree.
//!
//! Ranks the build steps that consumed the most time and characterizes how
//! concentrated the build's cost is. Feeds the `--summary` output only;
//! the treemap JSON is unaffected.

use super::tree::TreeNode;
use log::debug;

/// One expensive build step, addressed by its full display path
///
/// **Public** - returned from collect_slow_paths
#[derive(Debug, Clone)]
pub struct SlowPath {
    /// Slash-joined display path of the step
    pub path: String,

    /// Seconds attributed to this step alone
    pub seconds: f64,

    /// Percentage of the whole build
    pub percentage: f64,
}

/// Collect the top N most expensive steps from the tree
///
/// **Public** - main entry point for metrics calculation
///
/// A step's cost is the duration attributed to its node itself: a leaf's
/// weight, or for a node that absorbed collisions, its weight minus its
/// descendants' share.
pub fn collect_slow_paths(root: &TreeNode, top_n: usize) -> Vec<SlowPath> {
    let total = root.weight;
    let mut paths = Vec::new();
    collect_contributions(root, String::new(), &mut paths);

    paths.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    paths.truncate(top_n);

    debug!("Collected {} slow paths", paths.len());

    paths
        .into_iter()
        .map(|(path, seconds)| SlowPath {
            path,
            seconds,
            percentage: if total > 0.0 { seconds / total * 100.0 } else { 0.0 },
        })
        .collect()
}

/// Walk the tree gathering per-node own contributions
///
/// **Private** - internal helper for collect_slow_paths
fn collect_contributions(node: &TreeNode, prefix: String, out: &mut Vec<(String, f64)>) {
    for (segment, child) in &node.children {
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}/{}", prefix, segment)
        };

        let own = child.own_weight();
        // Pure grouping nodes contribute nothing themselves
        if child.is_leaf() || own > 1e-9 {
            out.push((path.clone(), own));
        }

        collect_contributions(child, path, out);
    }
}

/// Duration distribution statistics
///
/// **Public** - returned from calculate_duration_distribution
#[derive(Debug, Clone, Default)]
pub struct DurationDistribution {
    /// Total seconds across the whole build
    pub total_seconds: f64,

    /// Number of distinct build steps
    pub step_count: usize,

    /// Mean seconds per step
    pub mean_seconds: f64,

    /// Median seconds per step
    pub median_seconds: f64,

    /// Seconds consumed by the most expensive 10% of steps
    pub top_10_percent_seconds: f64,

    /// Percentage of total time in the top 10%
    pub top_10_percent_percentage: f64,
}

/// Calculate duration distribution statistics over all steps
///
/// **Public** - provides summary statistics
pub fn calculate_duration_distribution(root: &TreeNode) -> DurationDistribution {
    let mut contributions = Vec::new();
    collect_contributions(root, String::new(), &mut contributions);

    if contributions.is_empty() {
        return DurationDistribution::default();
    }

    let mut seconds: Vec<f64> = contributions.into_iter().map(|(_, s)| s).collect();
    seconds.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let total: f64 = seconds.iter().sum();
    let count = seconds.len();
    let mean = total / count as f64;
    let median = seconds[count / 2];

    let top_10_percent_count = (count as f64 * 0.1).ceil() as usize;
    let top_10_percent: f64 = seconds.iter().take(top_10_percent_count).sum();

    DurationDistribution {
        total_seconds: total,
        step_count: count,
        mean_seconds: mean,
        median_seconds: median,
        top_10_percent_seconds: top_10_percent,
        top_10_percent_percentage: if total > 0.0 {
            top_10_percent / total * 100.0
        } else {
            0.0
        },
    }
}

impl DurationDistribution {
    /// Check if build time is highly concentrated
    ///
    /// Returns true if the top 10% of steps consume >80% of the time;
    /// those steps are where optimization effort pays off.
    pub fn is_highly_concentrated(&self) -> bool {
        self.top_10_percent_percentage > 80.0
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and the text summary
    pub fn summary(&self) -> String {
        format!(
            "Total: {:.1}s | Steps: {} | Mean: {:.1}s | Median: {:.1}s | Top 10%: {:.1}%",
            self.total_seconds,
            self.step_count,
            self.mean_seconds,
            self.median_seconds,
            self.top_10_percent_percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_tree(entries: &[(&str, f64)]) -> TreeNode {
        let mut root = TreeNode::new();
        for (path, duration) in entries {
            root.insert(path, *duration).unwrap();
        }
        root
    }

    #[test]
    fn test_collect_slow_paths() {
        let root = build_tree(&[
            ("source/slow.o", 5.0),
            ("source/fast.o", 1.0),
            ("test/mid_unittest.o", 4.0),
        ]);

        let slow = collect_slow_paths(&root, 2);

        assert_eq!(slow.len(), 2);
        assert_eq!(slow[0].path, "source/slow.o");
        assert_eq!(slow[0].seconds, 5.0);
        assert_eq!(slow[0].percentage, 50.0);
        assert_eq!(slow[1].path, "test/mid_unittest.o");
    }

    #[test]
    fn test_slow_paths_include_collision_parents() {
        let root = build_tree(&[("a/b", 3.0), ("a/b", 1.0)]);

        let slow = collect_slow_paths(&root, 10);

        let parent = slow.iter().find(|s| s.path == "a/b").unwrap();
        assert!((parent.seconds - 3.0).abs() < 1e-9);
        let post = slow.iter().find(|s| s.path == "a/b/postbuild").unwrap();
        assert!((post.seconds - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_duration_distribution() {
        let root = build_tree(&[
            ("a/big.o", 8.0),
            ("a/small1.o", 1.0),
            ("b/small2.o", 0.5),
            ("b/small3.o", 0.5),
        ]);

        let dist = calculate_duration_distribution(&root);

        assert!((dist.total_seconds - 10.0).abs() < 1e-9);
        assert_eq!(dist.step_count, 4);
        assert!((dist.mean_seconds - 2.5).abs() < 1e-9);
        assert!(dist.is_highly_concentrated());
    }

    #[test]
    fn test_distribution_empty_tree() {
        let dist = calculate_duration_distribution(&TreeNode::new());
        assert_eq!(dist.step_count, 0);
        assert_eq!(dist.total_seconds, 0.0);
        assert!(!dist.is_highly_concentrated());
    }
}
