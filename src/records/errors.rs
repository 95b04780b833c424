use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The input file `{0}` does not exist")]
    InputNotFound(String),
    #[error("Input file is missing required columns: {0}")]
    MalformedInput(String),
    #[error("Error reading CSV content {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O error when reading {0}")]
    IoError(#[from] std::io::Error),
    #[error("Error serializing metrics {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Formatting error when writing {0}")]
    FormatError(#[from] std::fmt::Error),
    #[error("Failed to render status chart: {0}")]
    ChartRender(String),
    #[error("Failed to render PDF report: {0}")]
    PdfRender(String),
    #[error("Failed to render Word report: {0}")]
    DocxRender(String),
    #[error("{0}")]
    IllegalArguments(String),
}
