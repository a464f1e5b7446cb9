//! Source adapters: turn uploaded file content into raw voter rows.
//!
//! Both adapters produce the same loosely-typed [`RawVoterRow`] shape the
//! pipeline consumes; they do no validation beyond locating the expected
//! columns. A file that cannot be parsed fails the whole import attempt,
//! no partial rows are extracted.

mod csv;
mod excel;
pub mod template;

pub use self::csv::parse_csv_rows;
pub use self::excel::parse_excel_rows;

use common::model::cu_tri::RawVoterRow;
use thiserror::Error;

/// The one mandatory column of an import file.
pub const EMAIL_COLUMN: &str = "email";
pub const SDT_COLUMN: &str = "sdt";
pub const XACMINH_COLUMN: &str = "xacminh";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file type: '{0}' (expected .csv, .xlsx or .xls)")]
    UnsupportedFile(String),
    #[error("the file is missing the mandatory '{0}' column")]
    MissingColumn(&'static str),
    #[error("could not read the file: {0}")]
    Unreadable(String),
    #[error("malformed CSV content: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("could not render the template: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Parse an uploaded file into raw rows, dispatching on the file extension.
pub fn parse_upload(filename: &str, bytes: &[u8]) -> Result<Vec<RawVoterRow>, ImportError> {
    let extension = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match extension.as_str() {
        "csv" => parse_csv_rows(bytes),
        "xlsx" | "xls" => parse_excel_rows(bytes),
        _ => Err(ImportError::UnsupportedFile(filename.to_string())),
    }
}
