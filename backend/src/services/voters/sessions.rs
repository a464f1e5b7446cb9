use actix_web::{web, HttpResponse, Responder};
use common::model::cu_tri::ImportContext;
use common::requests::{CreateSessionRequest, SessionCreated, SessionView};
use log::info;

use crate::pipeline::BatchBuilder;

use super::state::SessionsState;

pub(crate) async fn create(
    state: web::Data<SessionsState>,
    req: web::Json<CreateSessionRequest>,
) -> impl Responder {
    let session_id = uuid::Uuid::new_v4().to_string();
    let ctx = ImportContext {
        phien_bau_cu_id: req.phien_bau_cu_id,
        cuoc_bau_cu_id: req.cuoc_bau_cu_id,
    };
    state
        .sessions
        .write()
        .await
        .insert(session_id.clone(), BatchBuilder::new(ctx));
    info!(
        "opened import session {} (cuoc bau cu {}, phien {})",
        session_id, ctx.cuoc_bau_cu_id, ctx.phien_bau_cu_id
    );
    HttpResponse::Ok().json(SessionCreated { session_id })
}

pub(crate) async fn view(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
) -> impl Responder {
    let sessions = state.sessions.read().await;
    match sessions.get(session_id.as_str()) {
        Some(builder) => HttpResponse::Ok().json(SessionView {
            session_id: session_id.into_inner(),
            context: *builder.context(),
            rows: builder.rows().to_vec(),
            report: builder.validate().report,
        }),
        None => HttpResponse::NotFound().body("Import session not found"),
    }
}

pub(crate) async fn discard(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
) -> impl Responder {
    let removed = state.sessions.write().await.remove(session_id.as_str());
    match removed {
        Some(_) => {
            info!("discarded import session {}", session_id);
            HttpResponse::Ok().body("Session discarded")
        }
        None => HttpResponse::NotFound().body("Import session not found"),
    }
}
