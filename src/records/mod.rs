pub mod errors;
pub mod loader;
pub mod metrics;

use std::fmt::Formatter;

use errors::Error;

pub type Result<R> = std::result::Result<R, Error>;

/// Canonical execution status for a test record. Raw free-text values are
/// folded into one of the three known buckets where possible; everything else
/// is carried through as-is so it still shows up in the detail tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Unrecognized(String),
}

impl TestStatus {
    /// Trims and lowercases the raw value, then maps the common
    /// abbreviations. Idempotent over the `Display` form.
    pub fn normalize(raw: &str) -> TestStatus {
        let canonical = raw.trim().to_lowercase();
        match canonical.as_str() {
            "pass" | "passed" => TestStatus::Passed,
            "fail" | "failed" => TestStatus::Failed,
            "skip" | "skipped" => TestStatus::Skipped,
            _ => TestStatus::Unrecognized(canonical),
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TestStatus::Passed => f.write_str("passed"),
            TestStatus::Failed => f.write_str("failed"),
            TestStatus::Skipped => f.write_str("skipped"),
            TestStatus::Unrecognized(other) => f.write_str(other),
        }
    }
}

/// One row of the input CSV. Execution time is display text, never parsed as
/// a duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub test_case: String,
    pub status: TestStatus,
    pub execution_time: String,
    pub comments: String,
}
