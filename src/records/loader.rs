use std::path::Path;

use itertools::Itertools;

use crate::records::errors::Error;
use crate::records::{Result, TestRecord, TestStatus};

/// Column names after header normalization, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["test case", "status", "execution time", "comments"];

struct Columns {
    test_case: usize,
    status: usize,
    execution_time: usize,
    comments: usize,
}

impl Columns {
    fn resolve(headers: &[String]) -> Result<Columns> {
        let position = |name: &str| headers.iter().position(|header| header == name);

        match (
            position("test case"),
            position("status"),
            position("execution time"),
            position("comments"),
        ) {
            (Some(test_case), Some(status), Some(execution_time), Some(comments)) => Ok(Columns {
                test_case,
                status,
                execution_time,
                comments,
            }),
            (test_case, status, execution_time, comments) => {
                let missing = REQUIRED_COLUMNS
                    .iter()
                    .zip([test_case, status, execution_time, comments])
                    .filter(|(_, at)| at.is_none())
                    .map(|(name, _)| *name)
                    .join(", ");

                Err(Error::MalformedInput(missing))
            }
        }
    }
}

/// Loads the CSV at `path` into an ordered sequence of records with
/// canonicalized status values.
///
/// Headers are matched after trimming and lowercasing, and the full required
/// set is validated up front so a broken file fails with one error naming
/// every missing column instead of a lookup failure deep inside rendering.
pub fn load_records(path: &Path) -> Result<Vec<TestRecord>> {
    if !path.exists() {
        return Err(Error::InputNotFound(format!("{}", path.display())));
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect::<Vec<String>>();
    let columns = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let field = |at: usize| row.get(at).unwrap_or("").to_string();

        records.push(TestRecord {
            test_case: field(columns.test_case),
            status: TestStatus::normalize(row.get(columns.status).unwrap_or("")),
            execution_time: field(columns.execution_time),
            comments: field(columns.comments),
        });
    }

    Ok(records)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
