use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};
use common::model::cu_tri::{RawVoterRow, XacMinhValue};

use super::{ImportError, EMAIL_COLUMN, SDT_COLUMN, XACMINH_COLUMN};

fn cell_string(row: &[Data], idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .and_then(|cell| cell.as_string())
        .map(|s| s.trim().to_string())
}

/// Parse `.xlsx`/`.xls` bytes into raw voter rows.
///
/// Columns are located by header-name lookup in the first row of the first
/// worksheet, matched case-insensitively; `email` is mandatory. A `xacminh`
/// cell may be a real spreadsheet boolean or text, both are carried through
/// for the normalizer to coerce.
pub fn parse_excel_rows(bytes: &[u8]) -> Result<Vec<RawVoterRow>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| ImportError::Unreadable(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::Unreadable("workbook has no worksheets".to_string()))?
        .map_err(|e| ImportError::Unreadable(e.to_string()))?;

    let mut rows_iter = range.rows();
    let header = rows_iter
        .next()
        .ok_or(ImportError::MissingColumn(EMAIL_COLUMN))?;

    let mut email_idx = None;
    let mut sdt_idx = None;
    let mut xacminh_idx = None;
    for (idx, cell) in header.iter().enumerate() {
        let Some(name) = cell.as_string() else {
            continue;
        };
        let name = name.trim().to_lowercase();
        if name == EMAIL_COLUMN {
            email_idx = Some(idx);
        } else if name == SDT_COLUMN {
            sdt_idx = Some(idx);
        } else if name == XACMINH_COLUMN {
            xacminh_idx = Some(idx);
        }
    }
    let email_idx = email_idx.ok_or(ImportError::MissingColumn(EMAIL_COLUMN))?;

    let mut rows = Vec::new();
    // Interior blank rows are kept as empty records so error row numbers
    // keep matching the sheet the operator is looking at; only trailing
    // blanks, common in hand-edited sheets, are dropped.
    let mut pending_blanks = 0usize;
    for row in rows_iter {
        if row.iter().all(|cell| cell.is_empty()) {
            pending_blanks += 1;
            continue;
        }
        for _ in 0..pending_blanks {
            rows.push(RawVoterRow::default());
        }
        pending_blanks = 0;
        let xac_minh = xacminh_idx.and_then(|i| row.get(i)).and_then(|cell| {
            if let Some(b) = cell.get_bool() {
                Some(XacMinhValue::Bool(b))
            } else {
                cell.as_string()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .map(XacMinhValue::Text)
            }
        });
        rows.push(RawVoterRow {
            email: cell_string(row, Some(email_idx)),
            sdt: cell_string(row, sdt_idx),
            xac_minh,
        });
    }
    Ok(rows)
}
