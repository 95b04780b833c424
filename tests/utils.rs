use std::path::PathBuf;

use clap::Parser;

use docutest::commands::{DocuTest, Executable};
use docutest::utils::reader::Reader;
use docutest::utils::writer::Writer;

#[non_exhaustive]
pub struct StatusCode;

const DOCUTEST_TEST_APP_NAME: &str = "docutest-test";

#[allow(dead_code)]
impl StatusCode {
    pub const SUCCESS: i32 = 0;
    pub const INTERNAL_FAILURE: i32 = -1;
    pub const PARSING_ERROR: i32 = 5;
}

pub fn get_full_path_for_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push(path);
    resource.display().to_string()
}

/// Unique scratch directory for one test; callers remove it themselves.
#[allow(dead_code)]
pub fn scratch_output_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("docutest-{}-{}", std::process::id(), tag));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

pub trait CommandTestRunner {
    fn build_args(&self) -> Vec<String>;

    fn run(&self, writer: &mut Writer, reader: &mut Reader) -> i32 {
        let args = self
            .build_args()
            .iter()
            .fold(vec![String::from(DOCUTEST_TEST_APP_NAME)], |mut res, arg| {
                res.push(arg.to_string());
                res
            });

        let app = DocuTest::parse_from(args);

        match app.execute(writer, reader) {
            Err(e) => {
                writer
                    .write_err(format!("Error occurred {e}"))
                    .expect("failed to write to stderr");

                StatusCode::INTERNAL_FAILURE
            }
            Ok(code) => code,
        }
    }
}
