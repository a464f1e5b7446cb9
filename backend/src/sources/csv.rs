use common::model::cu_tri::{RawVoterRow, XacMinhValue};

use super::{ImportError, EMAIL_COLUMN, SDT_COLUMN, XACMINH_COLUMN};

/// Pick the delimiter that occurs most often in the header line. Exported
/// spreadsheets in the wild use `;` or tabs as often as commas; on a tie
/// (including a single-column header with no delimiter at all) comma wins.
fn detect_delimiter(header_line: &str) -> u8 {
    let mut best = b',';
    let mut best_count = header_line.matches(',').count();
    for candidate in [b';', b'\t', b'|'] {
        let count = header_line.matches(candidate as char).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Parse CSV bytes into raw voter rows.
///
/// The header row is matched case-insensitively; only the `email` column is
/// mandatory. Cell values are passed through untrimmed-of-meaning: the
/// normalizer owns trimming and coercion.
pub fn parse_csv_rows(bytes: &[u8]) -> Result<Vec<RawVoterRow>, ImportError> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim_start_matches('\u{feff}');
    let header_line = text.lines().next().unwrap_or_default();
    let delimiter = detect_delimiter(header_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut email_idx = None;
    let mut sdt_idx = None;
    let mut xacminh_idx = None;
    for (idx, header) in reader.headers()?.iter().enumerate() {
        let name = header.trim().to_lowercase();
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
    for record in reader.records() {
        let record = record?;
        let cell = |idx: usize| record.get(idx).map(|s| s.to_string());
        rows.push(RawVoterRow {
            email: cell(email_idx),
            sdt: sdt_idx.and_then(&cell),
            xac_minh: xacminh_idx
                .and_then(&cell)
                .filter(|s| !s.is_empty())
                .map(XacMinhValue::Text),
        });
    }
    Ok(rows)
}
