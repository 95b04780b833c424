pub mod chart;
pub mod docx;
pub mod pdf;

use std::path::{Path, PathBuf};

use crate::records::metrics::Metrics;
use crate::records::{Result, TestRecord};

pub const SUMMARY_TITLE: &str = "Test Results Summary";
pub const DETAIL_TITLE: &str = "Detailed Test Results";
pub const DETAIL_HEADERS: [&str; 4] = ["Test Case", "Status", "Execution Time", "Comments"];

/// The one content model both document renderers consume: summary lines,
/// the detail table in input row order, and an optional chart reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContent {
    pub summary: Vec<String>,
    pub rows: Vec<[String; 4]>,
    pub chart: Option<PathBuf>,
}

impl ReportContent {
    /// Builds the content once. Percentages are omitted entirely when no
    /// tests were recorded; a chart path that does not exist on disk is
    /// dropped so the renderers can skip the section.
    pub fn new(metrics: &Metrics, records: &[TestRecord], chart: Option<&Path>) -> ReportContent {
        let with_share = |label: &str, count: usize| match metrics.percentage(count) {
            Some(share) => format!("{label}: {count} ({share:.1}%)"),
            None => format!("{label}: {count}"),
        };

        let summary = vec![
            format!("Total Tests: {}", metrics.total_tests),
            with_share("Passed", metrics.passed),
            with_share("Failed", metrics.failed),
            with_share("Skipped", metrics.skipped),
            format!("Error Rate: {:.2}%", metrics.error_rate),
        ];

        let rows = records
            .iter()
            .map(|record| {
                [
                    record.test_case.clone(),
                    record.status.to_string(),
                    record.execution_time.clone(),
                    record.comments.clone(),
                ]
            })
            .collect();

        let chart = chart.filter(|path| path.exists()).map(Path::to_path_buf);

        ReportContent {
            summary,
            rows,
            chart,
        }
    }
}

pub trait Renderer {
    fn render(&self, content: &ReportContent, path: &Path) -> Result<()>;
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod content_tests;
