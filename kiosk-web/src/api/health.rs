use actix_web::{web, HttpResponse};

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(health));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}
