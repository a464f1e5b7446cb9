use actix_web::{web, HttpResponse, Responder};
use common::requests::SubmitResult;
use log::{info, warn};

use crate::gateway::GatewayClient;

use super::state::SessionsState;

/// HTTP handler: submit the valid subset of a session to the election
/// backend.
///
/// A batch with validation errors may still be submitted partially; the
/// report in the response tells the operator what was skipped. On gateway
/// failure the session and its preview survive untouched so the operator
/// can retry without re-entering anything.
pub(crate) async fn process(
    session_id: web::Path<String>,
    state: web::Data<SessionsState>,
    gateway: web::Data<GatewayClient>,
) -> impl Responder {
    // Snapshot under the read lock; the network call happens without it.
    let (ctx, validation) = {
        let sessions = state.sessions.read().await;
        match sessions.get(session_id.as_str()) {
            Some(builder) => (*builder.context(), builder.validate()),
            None => return HttpResponse::NotFound().body("Import session not found"),
        }
    };

    if validation.valid_data.is_empty() {
        return HttpResponse::BadRequest().json(validation.report);
    }

    match gateway.submit_batch(&ctx, &validation.valid_data).await {
        Ok(outcome) => {
            info!(
                "session {}: submitted {} record(s), saved {}, duplicates {}",
                session_id,
                validation.valid_data.len(),
                outcome.da_luu,
                outcome.trung_lap
            );
            HttpResponse::Ok().json(SubmitResult {
                report: validation.report,
                outcome,
            })
        }
        Err(e) => {
            warn!("session {}: submission failed: {}", session_id, e);
            HttpResponse::BadGateway().body(format!("Error: {}", e))
        }
    }
}
