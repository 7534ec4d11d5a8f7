//! Build-log reader for Ninja's `.ninja_log` format.
//!
//! The log is tab-separated text: one header line, then one record per
//! build edge with fields `start`, `finish`, `restat_mtime`, `output`,
//! `command_hash`. Timestamps are in milliseconds. Run `ninja -t recompact`
//! before feeding a log here so stale duplicate entries are gone.

use crate::utils::config::{LOG_FIELD_COUNT, LOG_HEADER_PREFIX, MILLIS_PER_SECOND, SUPPORTED_LOG_VERSION};
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A single build-step observation from the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Step start time, milliseconds since the start of the build
    pub start: u64,

    /// Step finish time, milliseconds since the start of the build
    pub finish: u64,

    /// Restat mtime recorded by the build system (unused by aggregation)
    pub restat_mtime: u64,

    /// Output artifact path, slash-delimited
    pub output: String,

    /// Hash of the command that produced the output (unused by aggregation)
    pub command_hash: String,
}

impl Record {
    /// Duration of the step in seconds.
    ///
    /// Saturates at zero; a log line with `finish < start` is corrupt but
    /// must not produce a negative weight.
    pub fn duration_secs(&self) -> f64 {
        self.finish.saturating_sub(self.start) as f64 / MILLIS_PER_SECOND
    }
}

/// Read and parse a build log from disk
///
/// **Public** - main entry point for log reading
///
/// # Errors
/// * `ParseError::Io` - file cannot be opened or read
/// * `ParseError::MissingHeader` - file is empty
/// * `ParseError::MalformedLine` - a record line has the wrong field count
/// * `ParseError::InvalidTimestamp` - a timestamp field is not an integer
pub fn read_log(path: impl AsRef<Path>) -> Result<Vec<Record>, ParseError> {
    let path = path.as_ref();
    debug!("Reading build log: {}", path.display());

    let file = File::open(path)?;
    parse_log(BufReader::new(file))
}

/// Parse a build log from any buffered reader
///
/// **Public** - used by read_log and by tests that feed in-memory logs
pub fn parse_log(reader: impl BufRead) -> Result<Vec<Record>, ParseError> {
    let mut lines = reader.lines();

    // First line is the header/version line; it never carries a record.
    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(ParseError::MissingHeader),
    };
    check_header(&header);

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        // Line numbers are 1-based and include the header
        records.push(parse_line(&line, index + 2)?);
    }

    debug!("Parsed {} records from build log", records.len());
    Ok(records)
}

/// Validate the header line, warning on anything unexpected
///
/// **Private** - the header is always skipped; an odd header usually means
/// the wrong file was passed, so we say so but keep going.
fn check_header(header: &str) {
    match header.strip_prefix(LOG_HEADER_PREFIX) {
        Some(version) => match version.trim().parse::<u32>() {
            Ok(v) if v == SUPPORTED_LOG_VERSION => {}
            Ok(v) => warn!(
                "Build log version {} (expected {}); timings may be incomplete",
                v, SUPPORTED_LOG_VERSION
            ),
            Err(_) => warn!("Unrecognized build log version: {:?}", version),
        },
        None => warn!("First line does not look like a build log header: {:?}", header),
    }
}

/// Parse one record line
///
/// **Private** - internal helper for parse_log
fn parse_line(line: &str, line_no: usize) -> Result<Record, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != LOG_FIELD_COUNT {
        return Err(ParseError::MalformedLine {
            line: line_no,
            expected: LOG_FIELD_COUNT,
            found: fields.len(),
        });
    }

    let parse_ts = |value: &str| -> Result<u64, ParseError> {
        value.parse().map_err(|_| ParseError::InvalidTimestamp {
            line: line_no,
            value: value.to_string(),
        })
    };

    Ok(Record {
        start: parse_ts(fields[0])?,
        finish: parse_ts(fields[1])?,
        restat_mtime: parse_ts(fields[2])?,
        output: fields[3].to_string(),
        command_hash: fields[4].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = "# ninja log v5\n\
                       1000\t4000\t0\tobj/foo.o\thash1\n\
                       4000\t5000\t0\tobj/bar.o\thash2\n";

    #[test]
    fn test_parse_log() {
        let records = parse_log(LOG.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start, 1000);
        assert_eq!(records[0].finish, 4000);
        assert_eq!(records[0].output, "obj/foo.o");
        assert_eq!(records[0].command_hash, "hash1");
    }

    #[test]
    fn test_duration_secs() {
        let records = parse_log(LOG.as_bytes()).unwrap();
        assert_eq!(records[0].duration_secs(), 3.0);
        assert_eq!(records[1].duration_secs(), 1.0);
    }

    #[test]
    fn test_duration_saturates_on_corrupt_order() {
        let record = Record {
            start: 5000,
            finish: 4000,
            restat_mtime: 0,
            output: "a.o".to_string(),
            command_hash: "h".to_string(),
        };
        assert_eq!(record.duration_secs(), 0.0);
    }

    #[test]
    fn test_empty_log_is_missing_header() {
        let err = parse_log("".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MissingHeader));
    }

    #[test]
    fn test_header_only_log_is_empty() {
        let records = parse_log("# ninja log v5\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let log = "# ninja log v5\n1000\t4000\tobj/foo.o\n";
        let err = parse_log(log.as_bytes()).unwrap_err();
        match err {
            ParseError::MalformedLine { line, expected, found } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 5);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bad_timestamp_is_fatal() {
        let log = "# ninja log v5\nabc\t4000\t0\tobj/foo.o\thash\n";
        let err = parse_log(log.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTimestamp { line: 2, .. }));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let log = "# ninja log v5\n\n1000\t4000\t0\tobj/foo.o\thash1\n\n";
        let records = parse_log(log.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
    }
}
