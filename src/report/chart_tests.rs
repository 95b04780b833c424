use std::path::PathBuf;

use crate::records::metrics::Metrics;
use crate::records::{TestRecord, TestStatus};
use crate::report::chart::{render_status_chart, ChartArtifact};

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

fn chart_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("docutest-chart-{}-{}", std::process::id(), name))
}

fn metrics_for(statuses: &[TestStatus]) -> Metrics {
    let records = statuses
        .iter()
        .map(|status| TestRecord {
            test_case: String::from("T"),
            status: status.clone(),
            execution_time: String::new(),
            comments: String::new(),
        })
        .collect::<Vec<TestRecord>>();

    Metrics::from_records(&records)
}

#[test]
fn test_chart_is_written_as_png() {
    let path = chart_path("mixed.png");
    let metrics = metrics_for(&[TestStatus::Passed, TestStatus::Failed, TestStatus::Skipped]);

    render_status_chart(&metrics, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&PNG_MAGIC[..], &bytes[..4]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_all_zero_metrics_still_render() {
    let path = chart_path("empty.png");

    render_status_chart(&metrics_for(&[]), &path).unwrap();

    assert!(path.exists());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_artifact_removes_file_on_drop() {
    let path = chart_path("scoped.png");
    let metrics = metrics_for(&[TestStatus::Passed]);

    let artifact = ChartArtifact::create(&metrics, path.clone()).unwrap();
    assert!(artifact.path().exists());

    drop(artifact);
    assert!(!path.exists());
}
