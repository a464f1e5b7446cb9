use common::model::cu_tri::{CuTri, ImportContext, RawVoterRow};
use common::model::report::{BatchValidationReport, ErrorColumn, ValidationError};

use super::dedupe::dedupe;
use super::normalize::normalize;
use super::validators::{is_valid_email, is_valid_vietnamese_phone};

/// Result of one validation pass over a batch of raw rows.
pub struct BatchValidation {
    /// True only when the pass produced no errors at all. A batch can still
    /// be submitted partially when this is false; that call is the caller's.
    pub is_valid: bool,
    /// Records that passed field validation and survived deduplication, in
    /// original order.
    pub valid_data: Vec<CuTri>,
    pub report: BatchValidationReport,
}

/// Display row number for the operator: 1-based, with row 1 reserved for the
/// header line of the imported file. Applied to manual rows too, so errors
/// read the same regardless of how the row was entered.
fn display_row(index: usize) -> usize {
    index + 2
}

/// Validate a batch of raw rows against field rules and the in-batch
/// duplicate rule.
///
/// Pure and idempotent: the same input always yields the same report and
/// the same `valid_data`, order preserved. Rows failing the email or phone
/// rules are excluded before deduplication so an invalid row cannot knock
/// out a valid one sharing its email.
pub fn validate_batch(rows: &[RawVoterRow], ctx: &ImportContext) -> BatchValidation {
    let normalized: Vec<CuTri> = rows.iter().map(|raw| normalize(raw, ctx)).collect();

    let mut errors: Vec<ValidationError> = Vec::new();
    let mut field_valid: Vec<usize> = Vec::new();

    for (idx, rec) in normalized.iter().enumerate() {
        let row = display_row(idx);
        let mut ok = true;

        if rec.email.is_empty() {
            errors.push(ValidationError {
                row,
                column: ErrorColumn::Email,
                message: "Email không được để trống".to_string(),
            });
            ok = false;
        } else if !is_valid_email(&rec.email) {
            errors.push(ValidationError {
                row,
                column: ErrorColumn::Email,
                message: format!("Email '{}' không hợp lệ", rec.email),
            });
            ok = false;
        }

        if !is_valid_vietnamese_phone(&rec.sdt) {
            errors.push(ValidationError {
                row,
                column: ErrorColumn::Sdt,
                message: format!("Số điện thoại '{}' không hợp lệ", rec.sdt),
            });
            ok = false;
        }

        if ok {
            field_valid.push(idx);
        }
    }

    let candidates: Vec<CuTri> = field_valid
        .iter()
        .map(|&idx| normalized[idx].clone())
        .collect();
    let outcome = dedupe(&candidates);

    // Every occurrence of a duplicated email is reported, but only the
    // first occurrence stays in the valid set.
    for &idx in &field_valid {
        let rec = &normalized[idx];
        if outcome.duplicate_emails.contains(&rec.email.to_lowercase()) {
            errors.push(ValidationError {
                row: display_row(idx),
                column: ErrorColumn::Email,
                message: format!("Email '{}' bị trùng lặp trong danh sách", rec.email),
            });
        }
    }

    let valid_data: Vec<CuTri> = outcome
        .unique_indexes
        .iter()
        .map(|&pos| candidates[pos].clone())
        .collect();

    let total_records = rows.len();
    let valid_records = valid_data.len();
    let report = BatchValidationReport {
        total_records,
        valid_records,
        invalid_records: total_records - valid_records,
        errors,
    };

    BatchValidation {
        is_valid: report.errors.is_empty(),
        valid_data,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::cu_tri::RawVoterRow;

    fn ctx() -> ImportContext {
        ImportContext {
            phien_bau_cu_id: 11,
            cuoc_bau_cu_id: 4,
        }
    }

    fn row(email: &str, sdt: &str) -> RawVoterRow {
        RawVoterRow {
            email: Some(email.to_string()),
            sdt: Some(sdt.to_string()),
            xac_minh: None,
        }
    }

    #[test]
    fn clean_batch_is_valid() {
        let rows = vec![row("a@x.com", "0912345678"), row("b@x.com", "")];
        let result = validate_batch(&rows, &ctx());
        assert!(result.is_valid);
        assert_eq!(result.valid_data.len(), 2);
        assert_eq!(result.report.total_records, 2);
        assert_eq!(result.report.valid_records, 2);
        assert_eq!(result.report.invalid_records, 0);
        assert!(result.report.errors.is_empty());
    }

    #[test]
    fn missing_email_is_always_excluded() {
        let rows = vec![row("", "0912345678")];
        let result = validate_batch(&rows, &ctx());
        assert!(!result.is_valid);
        assert!(result.valid_data.is_empty());
        assert_eq!(result.report.errors.len(), 1);
        assert_eq!(result.report.errors[0].row, 2);
        assert_eq!(result.report.errors[0].message, "Email không được để trống");
    }

    #[test]
    fn malformed_fields_report_the_offending_value() {
        let rows = vec![row("khong-hop-le", "0123456789")];
        let result = validate_batch(&rows, &ctx());
        let messages: Vec<&str> = result
            .report
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Email 'khong-hop-le' không hợp lệ",
                "Số điện thoại '0123456789' không hợp lệ",
            ]
        );
        assert!(result.valid_data.is_empty());
    }

    #[test]
    fn duplicates_report_every_occurrence_but_keep_the_first() {
        let rows = vec![row("a@x.com", ""), row("A@X.com", ""), row("b@x.com", "")];
        let result = validate_batch(&rows, &ctx());

        let emails: Vec<&str> = result.valid_data.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);

        let dup_rows: Vec<usize> = result
            .report
            .errors
            .iter()
            .filter(|e| e.message.contains("trùng lặp"))
            .map(|e| e.row)
            .collect();
        assert_eq!(dup_rows, vec![2, 3]);
        assert!(!result.is_valid);
    }

    #[test]
    fn mixed_batch_counts() {
        let rows = vec![
            row("x@y.com", "0912345678"),
            row("", "0923456789"),
            row("x@y.com", ""),
        ];
        let result = validate_batch(&rows, &ctx());
        assert_eq!(result.report.total_records, 3);
        assert_eq!(result.report.valid_records, 1);
        assert_eq!(result.report.invalid_records, 2);
        assert_eq!(result.valid_data.len(), 1);
        assert_eq!(result.valid_data[0].email, "x@y.com");
        assert_eq!(result.valid_data[0].sdt, "0912345678");
        assert_eq!(result.valid_data[0].phien_bau_cu_id, 11);
        assert_eq!(result.valid_data[0].cuoc_bau_cu_id, 4);
    }

    #[test]
    fn validation_is_idempotent() {
        let rows = vec![
            row("a@x.com", "0912345678"),
            row("a@x.com", ""),
            row("", ""),
            row("b@x.com", "0351234567"),
        ];
        let first = validate_batch(&rows, &ctx());
        let second = validate_batch(&rows, &ctx());
        assert_eq!(first.report, second.report);
        assert_eq!(first.valid_data, second.valid_data);
        assert_eq!(first.is_valid, second.is_valid);
    }
}
