use serde::Serialize;

use crate::records::{TestRecord, TestStatus};

/// Aggregate counts over a full set of records. Rows whose status matched
/// none of the canonical buckets count toward `total_tests` only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub total_tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub error_rate: f64,
}

impl Metrics {
    /// Pure single-pass fold; a zero-row input yields all-zero metrics with
    /// an error rate of exactly `0.0`.
    pub fn from_records(records: &[TestRecord]) -> Metrics {
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        for record in records {
            match record.status {
                TestStatus::Passed => passed += 1,
                TestStatus::Failed => failed += 1,
                TestStatus::Skipped => skipped += 1,
                TestStatus::Unrecognized(_) => {}
            }
        }

        let total_tests = records.len();
        let error_rate = if total_tests == 0 {
            0.0
        } else {
            failed as f64 / total_tests as f64 * 100.0
        };

        Metrics {
            total_tests,
            passed,
            failed,
            skipped,
            error_rate,
        }
    }

    /// Share of `count` against the total, or `None` when there were no
    /// tests at all. Presentation decides how to format or omit it.
    pub fn percentage(&self, count: usize) -> Option<f64> {
        (self.total_tests > 0).then(|| count as f64 / self.total_tests as f64 * 100.0)
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod metrics_tests;
