//! JSON treemap output writer.
//!
//! Writes TreemapNode trees to JSON files with proper formatting.

use crate::parser::schema::TreemapNode;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a treemap to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `treemap` - Root node to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_treemap(
    treemap: &TreemapNode,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing treemap to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, treemap).map_err(OutputError::SerializationFailed)?;

    info!(
        "Treemap written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Write a treemap as pretty JSON to stdout
///
/// **Public** - for piping straight into other tools
pub fn write_treemap_stdout(treemap: &TreemapNode) -> Result<(), OutputError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json = serde_json::to_string_pretty(treemap).map_err(OutputError::SerializationFailed)?;
    writeln!(handle, "{}", json).map_err(OutputError::WriteFailed)?;

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a treemap from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_treemap(input_path: impl AsRef<Path>) -> Result<TreemapNode, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading treemap from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let treemap: TreemapNode =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!("Treemap loaded: {}", treemap.name);

    Ok(treemap)
}
