use serde::{Deserialize, Serialize};

/// Per-batch outcome counts returned by the election backend after a
/// submission: rows saved, rows auto-verified (email already linked to an
/// account with a wallet), verification emails sent, and duplicates the
/// server itself rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub da_luu: u32,
    pub da_xac_thuc: u32,
    pub da_gui_email: u32,
    pub trung_lap: u32,
}
