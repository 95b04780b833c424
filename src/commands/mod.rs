pub mod completions;
pub mod report;

use clap::{Parser, Subcommand};

use crate::records::Result;
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "docutest";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const ABOUT: &str = r#"
  docutest turns a CSV of test-execution results into aggregate pass/fail
  metrics and renders them as a status bar chart embedded into a PDF report
  and a Word report."#;

// Arguments for report
pub const INPUT: (&str, char) = ("input", 'i');
pub const INPUT_DIR: (&str, char) = ("input-dir", 'd');
pub const OUTPUT_DIR: (&str, char) = ("output-dir", 'o');
pub const PRINT_JSON: (&str, char) = ("print-json", 'p');
// Arguments for completions
pub const SHELL: (&str, char) = ("shell", 's');
pub const LOCATION: (&str, char) = ("location", 'l');

pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = 5;

pub trait Executable {
    fn execute(&self, writer: &mut Writer, reader: &mut Reader) -> Result<i32>;
}

#[derive(Debug, Parser)]
#[command(name = APP_NAME, version = APP_VERSION, about = ABOUT, arg_required_else_help = true)]
pub struct DocuTest {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Report(report::Report),
    Completions(completions::Completions),
}

impl Executable for DocuTest {
    fn execute(&self, writer: &mut Writer, reader: &mut Reader) -> Result<i32> {
        match &self.command {
            Commands::Report(cmd) => cmd.execute(writer, reader),
            Commands::Completions(cmd) => cmd.execute(writer, reader),
        }
    }
}
