use serde::{Deserialize, Serialize};

use crate::model::cu_tri::{ImportContext, RawVoterRow};
use crate::model::report::BatchValidationReport;
use crate::model::submit::SubmitOutcome;

/// Payload for `POST /api/voters/sessions`: which election and voting
/// session the new import batch belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub cuoc_bau_cu_id: i64,
    pub phien_bau_cu_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub session_id: String,
}

/// Snapshot of an import session: the preview rows as entered so far plus a
/// freshly computed validation report over them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: String,
    pub context: ImportContext,
    pub rows: Vec<RawVoterRow>,
    pub report: BatchValidationReport,
}

/// Result of a file upload into a session. `unchanged` is set when the
/// uploaded bytes hash to the same fingerprint as the previous upload, in
/// which case no rows were appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub unchanged: bool,
    pub rows_added: usize,
    pub report: BatchValidationReport,
}

/// Result of submitting a session to the election backend: the validation
/// report for the batch as submitted, and the server's per-record counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResult {
    pub report: BatchValidationReport,
    pub outcome: SubmitOutcome,
}
