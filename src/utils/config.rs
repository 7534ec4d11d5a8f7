//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Label given to the root of every generated treemap
pub const ROOT_LABEL: &str = "everything";

/// Synthetic segment appended when two records resolve to the same leaf path
pub const COLLISION_SEGMENT: &str = "postbuild";

// Log timestamps are in milliseconds; weights are seconds
pub const MILLIS_PER_SECOND: f64 = 1000.0;

/// Number of tab-separated fields in a well-formed log line
pub const LOG_FIELD_COUNT: usize = 5;

/// Header prefix of a recognized build log
pub const LOG_HEADER_PREFIX: &str = "# ninja log v";

/// Log format version this tool is written against
pub const SUPPORTED_LOG_VERSION: u32 = 5;

// Path rewriting tables (applied in order by the record filter)
pub const GENERATED_PREFIXES: &[&str] = &["obj/", "gen/"];
pub const TEST_OBJECT_SUFFIXES: &[&str] = &["_unittest.o", "Test.o"];
pub const OBJECT_SUFFIX: &str = ".o";
pub const TEST_CATEGORY: &str = "test/";
pub const SOURCE_CATEGORY: &str = "source/";

/// Upper bound for --top-entries (anything larger is a typo, not a request)
pub const MAX_TOP_ENTRIES: usize = 1000;
