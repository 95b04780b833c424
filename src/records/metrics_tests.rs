use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::records::metrics::Metrics;
use crate::records::{TestRecord, TestStatus};

fn record(status: TestStatus) -> TestRecord {
    TestRecord {
        test_case: String::from("T"),
        status,
        execution_time: String::from("1s"),
        comments: String::new(),
    }
}

#[test]
fn test_mixed_statuses_fold_into_buckets() {
    let records = vec![
        record(TestStatus::Passed),
        record(TestStatus::Failed),
        record(TestStatus::Skipped),
    ];

    let metrics = Metrics::from_records(&records);

    assert_eq!(
        Metrics {
            total_tests: 3,
            passed: 1,
            failed: 1,
            skipped: 1,
            error_rate: 1.0 / 3.0 * 100.0,
        },
        metrics
    );
}

#[test]
fn test_empty_input_yields_zero_metrics() {
    let metrics = Metrics::from_records(&[]);

    assert_eq!(
        Metrics {
            total_tests: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
            error_rate: 0.0,
        },
        metrics
    );
    assert_eq!(None, metrics.percentage(0));
}

#[test]
fn test_unrecognized_status_counts_toward_total_only() {
    let records = vec![
        record(TestStatus::Passed),
        record(TestStatus::Unrecognized(String::from("blocked"))),
        record(TestStatus::Failed),
    ];

    let metrics = Metrics::from_records(&records);

    assert_eq!(3, metrics.total_tests);
    assert_eq!(1, metrics.passed);
    assert_eq!(1, metrics.failed);
    assert_eq!(0, metrics.skipped);
    assert!(metrics.passed + metrics.failed + metrics.skipped < metrics.total_tests);
}

#[rstest]
#[case(vec![])]
#[case(vec![record(TestStatus::Passed)])]
#[case(vec![record(TestStatus::Failed), record(TestStatus::Failed)])]
#[case(vec![record(TestStatus::Passed), record(TestStatus::Skipped), record(TestStatus::Unrecognized(String::from("blocked")))])]
fn test_bucket_sum_never_exceeds_total(#[case] records: Vec<TestRecord>) {
    let metrics = Metrics::from_records(&records);
    let unrecognized = records
        .iter()
        .filter(|r| matches!(r.status, TestStatus::Unrecognized(_)))
        .count();

    assert!(metrics.passed + metrics.failed + metrics.skipped <= metrics.total_tests);
    assert_eq!(
        unrecognized == 0,
        metrics.passed + metrics.failed + metrics.skipped == metrics.total_tests
    );
}

#[test]
fn test_error_rate_is_failed_share_of_total() {
    let records = vec![
        record(TestStatus::Failed),
        record(TestStatus::Failed),
        record(TestStatus::Passed),
        record(TestStatus::Passed),
    ];

    let metrics = Metrics::from_records(&records);

    assert_eq!(50.0, metrics.error_rate);
    assert_eq!(Some(50.0), metrics.percentage(metrics.passed));
}
