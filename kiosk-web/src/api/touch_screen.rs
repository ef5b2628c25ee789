use super::{see_other, validated};
use crate::{pages, AppState};
use actix_web::{web, HttpResponse};
use kiosk_error::WebResult;
use kiosk_models::{
    domain::prelude::{PathId, TouchScreenForm},
    enums::common::MediaKind,
};
use kiosk_repository::{MediaRepository, TouchScreenRepository};
use std::sync::Arc;

pub(super) const ROUTER_PREFIX: &str = "/touchscreen_c";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("{ROUTER_PREFIX}/{{id}}"))
            .route(web::get().to(view))
            .route(web::post().to(submit)),
    );
}

/// `id` is the settings tab the page opens on.
async fn view(
    state: web::Data<Arc<AppState>>,
    path: web::Path<PathId>,
) -> WebResult<HttpResponse> {
    let touch = TouchScreenRepository::get(&state.db).await?;
    let images = MediaRepository::list_by_kind(&state.db, MediaKind::Image).await?;
    let audios = MediaRepository::list_by_kind(&state.db, MediaKind::Audio).await?;
    Ok(pages::touch_screen(path.id, &touch, &images, &audios).into_response())
}

async fn submit(
    state: web::Data<Arc<AppState>>,
    path: web::Path<PathId>,
    form: web::Form<TouchScreenForm>,
) -> WebResult<HttpResponse> {
    if let Some(form) = validated(form.into_inner(), "touch screen") {
        let (update, background, audio) = form.into_parts();
        TouchScreenRepository::save(&state.db, update, background, audio).await?;
    }
    Ok(see_other(&format!("{ROUTER_PREFIX}/{}", path.id)))
}
