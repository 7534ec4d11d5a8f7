//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the build log
//! 2. Filters and rewrites records
//! 3. Aggregates durations into the path tree
//! 4. Writes the treemap JSON

use crate::aggregator::{
    calculate_duration_distribution, collect_slow_paths, filter_records, TreeNode,
};
use crate::output::{format_duration, to_treemap, write_treemap, write_treemap_stdout};
use crate::parser::read_log;
use crate::utils::config::{MAX_TOP_ENTRIES, ROOT_LABEL};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the build log
    pub log: PathBuf,

    /// Output path for treemap JSON
    pub output: PathBuf,

    /// Print JSON to stdout instead of writing a file
    pub emit_stdout: bool,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of slowest steps to list in the summary
    pub top_entries: usize,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            log: PathBuf::from(".ninja_log"),
            output: PathBuf::from("treemap.json"),
            emit_stdout: false,
            print_summary: false,
            top_entries: 20,
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Build log read/parse errors
/// * Aggregation errors (empty output path in the log)
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Analyzing build log: {}", args.log.display());

    // Step 1/4: Read the build log
    info!("Step 1/4: Reading build log...");
    let records = read_log(&args.log).context("Failed to read build log")?;

    info!("Read {} records", records.len());

    // Step 2/4 + 3/4: Filter records and aggregate into the tree.
    // The filter yields lazily, so both steps share one pass.
    info!("Step 2/4: Filtering records...");
    info!("Step 3/4: Aggregating durations...");

    let mut root = TreeNode::new();
    let mut retained = 0usize;
    for (path, duration) in filter_records(&records) {
        root.insert(&path, duration)
            .with_context(|| format!("Failed to aggregate record for {:?}", path))?;
        retained += 1;
    }

    let dropped = records.len() - retained;
    debug!("Retained {} records, dropped {} duplicates", retained, dropped);
    info!("Total build time: {}", format_duration(root.weight));

    // Step 4/4: Serialize and write
    info!("Step 4/4: Writing treemap...");
    let treemap = to_treemap(&root, ROOT_LABEL);

    if args.emit_stdout {
        write_treemap_stdout(&treemap).context("Failed to write treemap to stdout")?;
    } else {
        write_treemap(&treemap, &args.output).context("Failed to write treemap JSON")?;
        info!("✓ Treemap written to: {}", args.output.display());
    }

    // Print text summary (if requested)
    if args.print_summary {
        print_summary(&args, &root, retained, dropped);
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Print the text summary block
///
/// **Private** - internal helper for execute_analyze
fn print_summary(args: &AnalyzeArgs, root: &TreeNode, retained: usize, dropped: usize) {
    let distribution = calculate_duration_distribution(root);
    let slow_paths = collect_slow_paths(root, args.top_entries);

    println!("\n{}", "=".repeat(80));
    println!("BUILD SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Log:         {}", args.log.display());
    println!("Build steps: {} ({} duplicates dropped)", retained, dropped);
    println!("Total time:  {}", format_duration(root.weight));
    println!("\n{}", distribution.summary());

    if distribution.is_highly_concentrated() {
        println!("Note: most build time sits in a few steps; see the list below.");
    }

    println!("\nSlowest steps:");
    for (i, path) in slow_paths.iter().enumerate() {
        println!(
            "  {:>2}. {:>8} ({:.1}%)  {}",
            i + 1,
            format_duration(path.seconds),
            path.percentage,
            path.path
        );
    }

    println!(
        "\nGenerated:   {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{}", "=".repeat(80));
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.log.as_os_str().is_empty() {
        anyhow::bail!("Build log path cannot be empty");
    }

    if !args.emit_stdout && args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.top_entries == 0 {
        anyhow::bail!("top-entries must be greater than 0");
    }

    if args.top_entries > MAX_TOP_ENTRIES {
        anyhow::bail!("top-entries is too large (max {})", MAX_TOP_ENTRIES);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = AnalyzeArgs::default();
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_log() {
        let args = AnalyzeArgs {
            log: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let args = AnalyzeArgs {
            output: PathBuf::new(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_stdout_needs_no_output() {
        let args = AnalyzeArgs {
            output: PathBuf::new(),
            emit_stdout: true,
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_top_entries_zero() {
        let args = AnalyzeArgs {
            top_entries: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_entries_too_large() {
        let args = AnalyzeArgs {
            top_entries: 2000,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }
}
