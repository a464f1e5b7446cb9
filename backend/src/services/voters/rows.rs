use actix_web::{web, HttpResponse, Responder};
use common::model::cu_tri::RawVoterRow;

use super::state::SessionsState;

pub(crate) async fn add(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
    rows: web::Json<Vec<RawVoterRow>>,
) -> impl Responder {
    let mut sessions = state.sessions.write().await;
    match sessions.get_mut(session_id.as_str()) {
        Some(builder) => {
            builder.extend(rows.into_inner());
            HttpResponse::Ok().json(builder.validate().report)
        }
        None => HttpResponse::NotFound().body("Import session not found"),
    }
}

pub(crate) async fn update(
    path: web::Path<(String, usize)>,
    state: web::Data<SessionsState>,
    row: web::Json<RawVoterRow>,
) -> impl Responder {
    let (session_id, index) = path.into_inner();
    let mut sessions = state.sessions.write().await;
    match sessions.get_mut(&session_id) {
        Some(builder) => {
            if builder.update(index, row.into_inner()) {
                HttpResponse::Ok().json(builder.validate().report)
            } else {
                HttpResponse::NotFound().body("Row index out of range")
            }
        }
        None => HttpResponse::NotFound().body("Import session not found"),
    }
}

pub(crate) async fn remove(
    path: web::Path<(String, usize)>,
    state: web::Data<SessionsState>,
) -> impl Responder {
    let (session_id, index) = path.into_inner();
    let mut sessions = state.sessions.write().await;
    match sessions.get_mut(&session_id) {
        Some(builder) => {
            if builder.remove(index) {
                HttpResponse::Ok().json(builder.validate().report)
            } else {
                HttpResponse::NotFound().body("Row index out of range")
            }
        }
        None => HttpResponse::NotFound().body("Import session not found"),
    }
}

pub(crate) async fn clear(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
) -> impl Responder {
    let mut sessions = state.sessions.write().await;
    match sessions.get_mut(session_id.as_str()) {
        Some(builder) => {
            builder.clear();
            HttpResponse::Ok().json(builder.validate().report)
        }
        None => HttpResponse::NotFound().body("Import session not found"),
    }
}
