use std::process::exit;

use clap::Parser;

use docutest::commands::{DocuTest, Executable, ERROR_STATUS_CODE};
use docutest::utils::reader::Reader;
use docutest::utils::writer::Writer;

fn main() {
    let app = DocuTest::parse();
    let mut writer = Writer::default();
    let mut reader = Reader::default();

    match app.execute(&mut writer, &mut reader) {
        Ok(code) => exit(code),
        Err(e) => {
            writer
                .write_err(format!("Error occurred {e}"))
                .expect("failed to write to stderr");

            exit(ERROR_STATUS_CODE);
        }
    }
}
