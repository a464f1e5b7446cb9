use actix_web::{HttpResponse, Responder};

use crate::sources::template;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub(crate) async fn csv() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"mau-cu-tri.csv\"",
        ))
        .body(template::csv_template())
}

pub(crate) async fn xlsx() -> impl Responder {
    match template::xlsx_template() {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(XLSX_MIME)
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"mau-cu-tri.xlsx\"",
            ))
            .body(bytes),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}
