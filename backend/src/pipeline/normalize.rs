use common::model::cu_tri::{CuTri, ImportContext, RawVoterRow, XacMinhValue};

/// Convert a loosely-typed input row into a canonical voter record.
///
/// Malformed or absent values degrade to defaults rather than failing; the
/// batch validator decides afterwards whether the record is usable. The
/// session and election ids always come from `ctx`, never from the row
/// itself.
pub fn normalize(raw: &RawVoterRow, ctx: &ImportContext) -> CuTri {
    CuTri {
        email: raw.email.as_deref().unwrap_or("").trim().to_string(),
        sdt: raw.sdt.as_deref().unwrap_or("").trim().to_string(),
        xac_minh: coerce_xac_minh(raw.xac_minh.as_ref()),
        bo_phieu: false,
        so_lan_gui_otp: 0,
        phien_bau_cu_id: ctx.phien_bau_cu_id,
        cuoc_bau_cu_id: ctx.cuoc_bau_cu_id,
        tai_khoan_id: 0,
        vai_tro_id: 0,
        has_blockchain_wallet: false,
    }
}

fn coerce_xac_minh(value: Option<&XacMinhValue>) -> bool {
    match value {
        Some(XacMinhValue::Bool(b)) => *b,
        Some(XacMinhValue::Text(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("yes")
                || s.eq_ignore_ascii_case("true")
                || s == "1"
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ImportContext {
        ImportContext {
            phien_bau_cu_id: 7,
            cuoc_bau_cu_id: 3,
        }
    }

    #[test]
    fn trims_email_and_phone() {
        let raw = RawVoterRow {
            email: Some("  a@x.com  ".into()),
            sdt: Some(" 0912345678 ".into()),
            xac_minh: None,
        };
        let rec = normalize(&raw, &ctx());
        assert_eq!(rec.email, "a@x.com");
        assert_eq!(rec.sdt, "0912345678");
    }

    #[test]
    fn absent_fields_default() {
        let rec = normalize(&RawVoterRow::default(), &ctx());
        assert_eq!(rec.email, "");
        assert_eq!(rec.sdt, "");
        assert!(!rec.xac_minh);
        assert!(!rec.bo_phieu);
        assert_eq!(rec.so_lan_gui_otp, 0);
        assert_eq!(rec.tai_khoan_id, 0);
        assert_eq!(rec.vai_tro_id, 0);
        assert!(!rec.has_blockchain_wallet);
    }

    #[test]
    fn context_ids_always_win() {
        let rec = normalize(&RawVoterRow::with_email("a@x.com"), &ctx());
        assert_eq!(rec.phien_bau_cu_id, 7);
        assert_eq!(rec.cuoc_bau_cu_id, 3);
    }

    #[test]
    fn xac_minh_string_coercion() {
        for (text, expected) in [
            ("yes", true),
            ("YES", true),
            ("True", true),
            ("1", true),
            ("no", false),
            ("false", false),
            ("0", false),
            ("", false),
        ] {
            let raw = RawVoterRow {
                xac_minh: Some(XacMinhValue::Text(text.into())),
                ..RawVoterRow::with_email("a@x.com")
            };
            assert_eq!(normalize(&raw, &ctx()).xac_minh, expected, "value {text:?}");
        }
    }

    #[test]
    fn xac_minh_bool_passthrough() {
        let raw = RawVoterRow {
            xac_minh: Some(XacMinhValue::Bool(true)),
            ..RawVoterRow::with_email("a@x.com")
        };
        assert!(normalize(&raw, &ctx()).xac_minh);
    }
}
