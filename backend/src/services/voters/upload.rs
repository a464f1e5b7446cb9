use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::requests::UploadOutcome;
use futures_util::StreamExt;
use log::info;
use md5::Context;
use thiserror::Error;

use crate::sources::{parse_upload, ImportError};

use super::state::SessionsState;

#[derive(Debug, Error)]
enum UploadFailure {
    #[error("Import session not found")]
    SessionNotFound,
    #[error("the request carried no 'file' part")]
    MissingFile,
    #[error("could not read the upload: {0}")]
    Multipart(String),
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// HTTP handler: multipart upload of a voter list file into a session.
///
/// - `200 OK` with an [`UploadOutcome`] when the file parsed, including the
///   case where it was byte-identical to the previous upload.
/// - `400 Bad Request` for unreadable/misshapen files; the preview list is
///   left untouched, no partial rows are extracted.
/// - `404 Not Found` for unknown sessions.
pub(crate) async fn process(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
    payload: Multipart,
) -> impl Responder {
    match upload_voter_file(&session_id, &state, payload).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(UploadFailure::SessionNotFound) => {
            HttpResponse::NotFound().body("Import session not found")
        }
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

async fn upload_voter_file(
    session_id: &str,
    state: &SessionsState,
    mut payload: Multipart,
) -> Result<UploadOutcome, UploadFailure> {
    let mut filename: Option<String> = None;
    let mut bytes: Vec<u8> = Vec::new();
    let mut md5_hasher = Context::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| UploadFailure::Multipart(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()));

        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| UploadFailure::Multipart(e.to_string()))?;
            md5_hasher.consume(&chunk);
            bytes.extend_from_slice(&chunk);
        }
    }

    let filename = filename.ok_or(UploadFailure::MissingFile)?;

    // Parse before touching the session so a broken file cannot leave a
    // half-imported preview behind.
    let rows = parse_upload(&filename, &bytes)?;
    let digest = format!("{:x}", md5_hasher.finalize());

    let mut sessions = state.sessions.write().await;
    let builder = sessions
        .get_mut(session_id)
        .ok_or(UploadFailure::SessionNotFound)?;

    if builder.register_upload(&digest) {
        info!(
            "session {}: '{}' matches the previous upload, nothing appended",
            session_id, filename
        );
        return Ok(UploadOutcome {
            unchanged: true,
            rows_added: 0,
            report: builder.validate().report,
        });
    }

    let rows_added = rows.len();
    builder.extend(rows);
    info!(
        "session {}: appended {} row(s) from '{}'",
        session_id, rows_added, filename
    );
    Ok(UploadOutcome {
        unchanged: false,
        rows_added,
        report: builder.validate().report,
    })
}
