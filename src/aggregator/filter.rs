//! Record filtering: timestamp deduplication and path rewriting.
//!
//! Build systems write one log entry per output file of a multi-output
//! step, all sharing the same timestamps. Counting each copy would
//! multiply that step's cost by its output count, so records whose
//! `(start, finish)` pair was already seen are dropped. Output paths are
//! then massaged into display categories before aggregation.

use crate::parser::ninja_log::Record;
use crate::utils::config::{
    GENERATED_PREFIXES, OBJECT_SUFFIX, SOURCE_CATEGORY, TEST_CATEGORY, TEST_OBJECT_SUFFIXES,
};
use log::debug;
use std::collections::HashSet;

/// Streaming filter over raw build records
///
/// **Public** - one instance per aggregation run; the dedup set lives here
/// and nowhere else, so repeated runs in one process are independent.
#[derive(Debug, Default)]
pub struct RecordFilter {
    seen: HashSet<(u64, u64)>,
}

impl RecordFilter {
    /// Create a filter with an empty dedup set
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one record, yielding its display path and duration
    ///
    /// Returns `None` when the record's `(start, finish)` pair was already
    /// seen this run. Two genuinely distinct steps with identical
    /// timestamps are indistinguishable from one multi-output step and are
    /// merged; that is an accepted approximation.
    pub fn accept(&mut self, record: &Record) -> Option<(String, f64)> {
        if !self.seen.insert((record.start, record.finish)) {
            debug!(
                "Dropping duplicate record for {} ({}..{})",
                record.output, record.start, record.finish
            );
            return None;
        }

        Some((rewrite_path(&record.output), record.duration_secs()))
    }
}

/// Rewrite an output path into its display category
///
/// **Public** - exposed for tests; pure function of the path.
///
/// Strips a leading `obj/` or `gen/`, then prefixes object files with
/// `test/` or `source/` depending on their suffix. Everything else passes
/// through unchanged.
pub fn rewrite_path(path: &str) -> String {
    let stripped = GENERATED_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .unwrap_or(path);

    if TEST_OBJECT_SUFFIXES.iter().any(|s| stripped.ends_with(s)) {
        format!("{}{}", TEST_CATEGORY, stripped)
    } else if stripped.ends_with(OBJECT_SUFFIX) {
        format!("{}{}", SOURCE_CATEGORY, stripped)
    } else {
        stripped.to_string()
    }
}

/// Adapt a sequence of records into the filtered `(path, duration)` stream
///
/// **Public** - main entry point for the analyze pipeline. Lazy; preserves
/// input order; later duplicates lose to the first occurrence.
pub fn filter_records<'a>(
    records: impl IntoIterator<Item = &'a Record> + 'a,
) -> impl Iterator<Item = (String, f64)> + 'a {
    let mut filter = RecordFilter::new();
    records
        .into_iter()
        .filter_map(move |record| filter.accept(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: u64, finish: u64, output: &str) -> Record {
        Record {
            start,
            finish,
            restat_mtime: 0,
            output: output.to_string(),
            command_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_rewrite_strips_generated_prefixes() {
        assert_eq!(rewrite_path("gen/foo.cc"), "foo.cc");
        assert_eq!(rewrite_path("obj/readme.txt"), "readme.txt");
    }

    #[test]
    fn test_rewrite_categorizes_test_objects() {
        assert_eq!(rewrite_path("obj/foo_unittest.o"), "test/foo_unittest.o");
        assert_eq!(rewrite_path("obj/FooTest.o"), "test/FooTest.o");
    }

    #[test]
    fn test_rewrite_categorizes_source_objects() {
        assert_eq!(rewrite_path("obj/bar.o"), "source/bar.o");
        assert_eq!(rewrite_path("bar.o"), "source/bar.o");
    }

    #[test]
    fn test_rewrite_passes_other_paths_through() {
        assert_eq!(rewrite_path("lib/libfoo.so"), "lib/libfoo.so");
    }

    #[test]
    fn test_prefix_strip_happens_before_suffix_check() {
        // gen/foo.cc has no .o suffix after stripping: no category prefix
        assert_eq!(rewrite_path("gen/foo.cc"), "foo.cc");
        // but a stripped object file still gets categorized
        assert_eq!(rewrite_path("gen/bar.o"), "source/bar.o");
    }

    #[test]
    fn test_duplicate_timestamps_are_dropped() {
        let mut filter = RecordFilter::new();
        let first = filter.accept(&record(1000, 2000, "a.o"));
        let second = filter.accept(&record(1000, 2000, "b.o"));

        assert_eq!(first, Some(("source/a.o".to_string(), 1.0)));
        assert_eq!(second, None);
    }

    #[test]
    fn test_distinct_timestamps_pass() {
        let mut filter = RecordFilter::new();
        assert!(filter.accept(&record(1000, 2000, "a.o")).is_some());
        assert!(filter.accept(&record(2000, 3000, "a.o")).is_some());
    }

    #[test]
    fn test_filter_records_preserves_order() {
        let records = vec![
            record(0, 1000, "obj/a.o"),
            record(0, 1000, "obj/twin.o"),
            record(1000, 3000, "gen/b.cc"),
        ];

        let pairs: Vec<(String, f64)> = filter_records(&records).collect();
        assert_eq!(
            pairs,
            vec![
                ("source/a.o".to_string(), 1.0),
                ("b.cc".to_string(), 2.0),
            ]
        );
    }

    #[test]
    fn test_fresh_filters_are_independent() {
        let r = record(1000, 2000, "a.o");
        let mut first = RecordFilter::new();
        assert!(first.accept(&r).is_some());
        assert!(first.accept(&r).is_none());

        let mut second = RecordFilter::new();
        assert!(second.accept(&r).is_some());
    }
}
