use serde::{Deserialize, Serialize};

/// Which field of a row a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorColumn {
    Email,
    Sdt,
}

/// One row-addressable validation error.
///
/// `row` is the display row number shown to the organizer: 1-based with row 1
/// reserved for the header line, so the first data row is row 2. This matches
/// the numbering of the spreadsheet the operator is looking at and is applied
/// to manually entered rows as well, for consistency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub row: usize,
    pub column: ErrorColumn,
    pub message: String,
}

/// Summary of one validation pass over a batch. Recomputed from scratch on
/// every pass, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchValidationReport {
    pub total_records: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    pub errors: Vec<ValidationError>,
}
