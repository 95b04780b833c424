use std::path::Path;

use pretty_assertions::assert_eq;

use crate::records::metrics::Metrics;
use crate::records::{TestRecord, TestStatus};
use crate::report::ReportContent;

fn record(name: &str, status: TestStatus) -> TestRecord {
    TestRecord {
        test_case: String::from(name),
        status,
        execution_time: String::from("1s"),
        comments: String::new(),
    }
}

#[test]
fn test_summary_lines_carry_counts_and_percentages() {
    let records = vec![
        record("T1", TestStatus::Passed),
        record("T2", TestStatus::Failed),
        record("T3", TestStatus::Skipped),
    ];
    let metrics = Metrics::from_records(&records);

    let content = ReportContent::new(&metrics, &records, None);

    assert_eq!(
        vec![
            String::from("Total Tests: 3"),
            String::from("Passed: 1 (33.3%)"),
            String::from("Failed: 1 (33.3%)"),
            String::from("Skipped: 1 (33.3%)"),
            String::from("Error Rate: 33.33%"),
        ],
        content.summary
    );
}

#[test]
fn test_zero_total_summary_omits_percentages() {
    let metrics = Metrics::from_records(&[]);

    let content = ReportContent::new(&metrics, &[], None);

    assert_eq!(
        vec![
            String::from("Total Tests: 0"),
            String::from("Passed: 0"),
            String::from("Failed: 0"),
            String::from("Skipped: 0"),
            String::from("Error Rate: 0.00%"),
        ],
        content.summary
    );
}

#[test]
fn test_detail_rows_keep_input_order_and_raw_statuses() {
    let records = vec![
        record("Z-last-alphabetically", TestStatus::Failed),
        record("A-first-alphabetically", TestStatus::Unrecognized(String::from("blocked"))),
    ];
    let metrics = Metrics::from_records(&records);

    let content = ReportContent::new(&metrics, &records, None);

    assert_eq!(2, content.rows.len());
    assert_eq!("Z-last-alphabetically", content.rows[0][0]);
    assert_eq!("failed", content.rows[0][1]);
    assert_eq!("A-first-alphabetically", content.rows[1][0]);
    assert_eq!("blocked", content.rows[1][1]);
}

#[test]
fn test_missing_chart_path_is_dropped() {
    let metrics = Metrics::from_records(&[]);

    let content = ReportContent::new(
        &metrics,
        &[],
        Some(Path::new("/definitely/not/a/chart.png")),
    );

    assert_eq!(None, content.chart);
}
