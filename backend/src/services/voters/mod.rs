//! Voter import API.
//!
//! HTTP surface over the ingestion pipeline. An organizer UI drives one
//! *import session* per voting session it adds voters to: create a session,
//! fill its preview list by manual entry and/or file upload, review the
//! validation report, then submit the valid subset to the election backend.
//!
//! Routes under `/api/voters`:
//! - `POST   /sessions` — open an import session for an election/voting session pair.
//! - `GET    /sessions/{session_id}` — preview rows plus a fresh validation report.
//! - `DELETE /sessions/{session_id}` — discard the session and its preview.
//! - `POST   /sessions/{session_id}/rows` — append manually entered rows (JSON array).
//! - `DELETE /sessions/{session_id}/rows` — clear the preview list.
//! - `PUT    /sessions/{session_id}/rows/{index}` — replace one preview row.
//! - `DELETE /sessions/{session_id}/rows/{index}` — remove one preview row.
//! - `POST   /sessions/{session_id}/upload` — multipart CSV/XLSX upload into the preview.
//! - `POST   /sessions/{session_id}/submit` — send the valid records to the election backend.
//! - `GET    /template/csv`, `GET /template/xlsx` — downloadable import templates.

mod rows;
mod sessions;
pub mod state;
mod submit;
mod template;
mod upload;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/voters";

/// Configures and returns the Actix scope for voter import routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/sessions", post().to(sessions::create))
        .route("/sessions/{session_id}", get().to(sessions::view))
        .route("/sessions/{session_id}", delete().to(sessions::discard))
        .route("/sessions/{session_id}/rows", post().to(rows::add))
        .route("/sessions/{session_id}/rows", delete().to(rows::clear))
        .route("/sessions/{session_id}/rows/{index}", put().to(rows::update))
        .route("/sessions/{session_id}/rows/{index}", delete().to(rows::remove))
        .route("/sessions/{session_id}/upload", post().to(upload::process))
        .route("/sessions/{session_id}/submit", post().to(submit::process))
        .route("/template/csv", get().to(template::csv))
        .route("/template/xlsx", get().to(template::xlsx))
}
