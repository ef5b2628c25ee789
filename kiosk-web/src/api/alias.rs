use super::{see_other, validated};
use crate::{pages, AppState};
use actix_web::{web, HttpResponse};
use kiosk_error::WebResult;
use kiosk_models::domain::prelude::UpdateAliases;
use kiosk_repository::AliasesRepository;
use std::sync::Arc;

pub(super) const ROUTER_PREFIX: &str = "/alias";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(ROUTER_PREFIX, web::get().to(view))
        .route(ROUTER_PREFIX, web::post().to(submit));
}

async fn view(state: web::Data<Arc<AppState>>) -> WebResult<HttpResponse> {
    let aliases = AliasesRepository::get(&state.db).await?;
    Ok(pages::alias(&aliases).into_response())
}

async fn submit(
    state: web::Data<Arc<AppState>>,
    form: web::Form<UpdateAliases>,
) -> WebResult<HttpResponse> {
    if let Some(update) = validated(form.into_inner(), "alias") {
        AliasesRepository::save(&state.db, update).await?;
    }
    Ok(see_other(ROUTER_PREFIX))
}
