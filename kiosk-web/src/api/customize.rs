use super::see_other;
use crate::pages;
use actix_web::{web, HttpResponse};

pub(super) const ROUTER_PREFIX: &str = "/customize";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route(ROUTER_PREFIX, web::get().to(view));
}

async fn index() -> HttpResponse {
    see_other(ROUTER_PREFIX)
}

async fn view() -> HttpResponse {
    pages::customize().into_response()
}
