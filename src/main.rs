//! Buildmap CLI
//!
//! Converts a Ninja build log into webtreemap JSON so build time can be
//! explored as a treemap of output paths.

use anyhow::Result;
use buildmap::commands::{
    display_schema, display_version, execute_analyze, validate_args, validate_treemap_file,
    AnalyzeArgs,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Buildmap - build-time treemaps from Ninja logs
#[derive(Parser, Debug)]
#[command(name = "buildmap")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a build log and write a treemap
    Analyze {
        /// Path to the build log
        #[arg(short, long, default_value = ".ninja_log")]
        log: PathBuf,

        /// Output path for treemap JSON
        #[arg(short, long, default_value = "treemap.json")]
        output: PathBuf,

        /// Print JSON to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of slowest steps to list in the summary
        #[arg(long, default_value = "20")]
        top_entries: usize,
    },

    /// Validate a treemap JSON file
    Validate {
        /// Path to treemap JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            log,
            output,
            stdout,
            summary,
            top_entries,
        } => {
            let args = AnalyzeArgs {
                log,
                output,
                emit_stdout: stdout,
                print_summary: summary,
                top_entries,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute analysis
            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_treemap_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
