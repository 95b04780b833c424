use std::fs;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use colored::Colorize;

use crate::commands::{Executable, SUCCESS_STATUS_CODE};
use crate::records::loader::load_records;
use crate::records::metrics::Metrics;
use crate::records::Result;
use crate::report::chart::ChartArtifact;
use crate::report::docx::DocxRenderer;
use crate::report::pdf::PdfRenderer;
use crate::report::{Renderer, ReportContent};
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

const ABOUT: &str =
    "Generates a PDF and a Word test report from a CSV of test-execution results";
const INPUT_HELP: &str =
    "Name of the CSV file inside the input directory. Asked for interactively when omitted";
const INPUT_DIR_HELP: &str = "Directory the input CSV is read from";
const OUTPUT_DIR_HELP: &str = "Directory the rendered reports are written to";
const PRINT_JSON_HELP: &str = "Print the computed metrics as JSON instead of the summary";

#[derive(Debug, Clone, Eq, PartialEq, Args)]
#[clap(about=ABOUT)]
/// .
/// The Report command loads and normalizes one CSV of test results, computes
/// the aggregate metrics and renders them into timestamped PDF and Word
/// documents with an embedded status chart
pub struct Report {
    #[arg(short, long, help=INPUT_HELP)]
    pub(crate) input: Option<String>,
    #[arg(short = 'd', long, default_value = "input", help=INPUT_DIR_HELP)]
    pub(crate) input_dir: String,
    #[arg(short, long, default_value = "output", help=OUTPUT_DIR_HELP)]
    pub(crate) output_dir: String,
    #[arg(short, long, help=PRINT_JSON_HELP)]
    pub(crate) print_json: bool,
}

impl Executable for Report {
    /// .
    /// runs the full pipeline for one input file
    ///
    /// This function will return an error if
    /// - the named CSV does not exist in the input directory
    /// - any of the required columns are absent
    /// - the chart or either document fails to render
    fn execute(&self, writer: &mut Writer, reader: &mut Reader) -> Result<i32> {
        let input_dir = PathBuf::from(&self.input_dir);
        let output_dir = PathBuf::from(&self.output_dir);
        fs::create_dir_all(&input_dir)?;
        fs::create_dir_all(&output_dir)?;

        let file_name = match &self.input {
            Some(name) => name.clone(),
            None => prompt_for_file_name(writer, reader, &self.input_dir)?,
        };

        let records = load_records(&input_dir.join(file_name.trim()))?;
        let metrics = Metrics::from_records(&records);

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let pdf_path = output_dir.join(format!("test_report_{timestamp}.pdf"));
        let docx_path = output_dir.join(format!("test_report_{timestamp}.docx"));

        // the chart only exists to be embedded into both documents; the
        // artifact removes the file again when it goes out of scope, on the
        // error paths included
        let chart = ChartArtifact::create(
            &metrics,
            output_dir.join(format!("chart_{timestamp}.png")),
        )?;
        let content = ReportContent::new(&metrics, &records, Some(chart.path()));
        PdfRenderer.render(&content, &pdf_path)?;
        DocxRenderer.render(&content, &docx_path)?;
        drop(chart);

        if self.print_json {
            writeln!(writer, "{}", serde_json::to_string_pretty(&metrics)?)?;
        } else {
            write_summary(writer, &metrics)?;
        }
        writeln!(
            writer,
            "Reports generated: {}, {}",
            pdf_path.display(),
            docx_path.display()
        )?;

        Ok(SUCCESS_STATUS_CODE)
    }
}

fn prompt_for_file_name(
    writer: &mut Writer,
    reader: &mut Reader,
    input_dir: &str,
) -> Result<String> {
    write!(writer, "Enter the CSV file name (in '{input_dir}' folder): ")?;
    writer.flush()?;

    Ok(reader.read_line()?)
}

fn write_summary(writer: &mut Writer, metrics: &Metrics) -> Result<()> {
    writeln!(writer, "Total Tests: {}", metrics.total_tests)?;
    writeln!(writer, "Passed: {}", metrics.passed.to_string().green())?;
    writeln!(writer, "Failed: {}", metrics.failed.to_string().red())?;
    writeln!(writer, "Skipped: {}", metrics.skipped.to_string().yellow())?;
    writeln!(writer, "Error Rate: {:.2}%", metrics.error_rate)?;

    Ok(())
}
