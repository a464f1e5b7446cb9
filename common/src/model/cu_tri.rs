use serde::{Deserialize, Serialize};

/// Verification flag as it arrives from loosely-typed sources.
///
/// A manually entered row carries a real boolean, while a parsed CSV or
/// spreadsheet cell carries text such as `"yes"`, `"TRUE"` or `"1"`. The
/// normalizer (`backend::pipeline::normalize`) coerces both shapes into the
/// `bool` stored on [`CuTri`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XacMinhValue {
    Bool(bool),
    Text(String),
}

/// One not-yet-validated voter row, as supplied by a form field or a parsed
/// file row. Every field is optional; absence is resolved by the normalizer,
/// never trusted to be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVoterRow {
    pub email: Option<String>,
    pub sdt: Option<String>,
    #[serde(rename = "xacMinh", alias = "xacminh")]
    pub xac_minh: Option<XacMinhValue>,
}

impl RawVoterRow {
    pub fn with_email(email: &str) -> Self {
        RawVoterRow {
            email: Some(email.to_string()),
            ..RawVoterRow::default()
        }
    }
}

/// The voting session and election a batch belongs to.
///
/// Always taken from the organizer's current session, never from the uploaded
/// rows, so a row cannot claim membership in another election.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportContext {
    pub phien_bau_cu_id: i64,
    pub cuoc_bau_cu_id: i64,
}

/// Canonical voter record, the shape the election backend accepts.
///
/// Produced from a [`RawVoterRow`] by the normalizer. `tai_khoan_id`,
/// `vai_tro_id` and `has_blockchain_wallet` are placeholders resolved
/// server-side; the client always submits their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuTri {
    pub email: String,
    pub sdt: String,
    pub xac_minh: bool,
    pub bo_phieu: bool,
    #[serde(rename = "soLanGuiOTP")]
    pub so_lan_gui_otp: u32,
    pub phien_bau_cu_id: i64,
    pub cuoc_bau_cu_id: i64,
    pub tai_khoan_id: i64,
    pub vai_tro_id: i64,
    pub has_blockchain_wallet: bool,
}
