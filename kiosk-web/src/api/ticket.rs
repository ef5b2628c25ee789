use super::{see_other, validated};
use crate::{pages, AppState};
use actix_web::{web, HttpResponse};
use kiosk_error::WebResult;
use kiosk_models::domain::prelude::TicketForm;
use kiosk_repository::PrinterRepository;
use std::sync::Arc;
use tracing::warn;

pub(super) const ROUTER_PREFIX: &str = "/ticket";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(ROUTER_PREFIX, web::get().to(view))
        .route(ROUTER_PREFIX, web::post().to(submit));
}

async fn view(state: web::Data<Arc<AppState>>) -> WebResult<HttpResponse> {
    let printer = PrinterRepository::get(&state.db).await?;
    Ok(pages::ticket(&printer).into_response())
}

/// Switch between registered and printed tickets.
async fn submit(
    state: web::Data<Arc<AppState>>,
    form: web::Form<TicketForm>,
) -> WebResult<HttpResponse> {
    let Some(form) = validated(form.into_inner(), "ticket") else {
        return Ok(see_other(ROUTER_PREFIX));
    };
    match form.into_command() {
        Some(command) => {
            PrinterRepository::record_ticket(&state.db, command).await?;
        }
        None => warn!("Ignored ticket settings with unknown kind or printer identity"),
    }
    Ok(see_other(ROUTER_PREFIX))
}
