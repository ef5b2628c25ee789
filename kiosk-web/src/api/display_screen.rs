use super::{see_other, validated};
use crate::{pages, AppState};
use actix_web::{web, HttpResponse};
use kiosk_error::WebResult;
use kiosk_models::{
    domain::prelude::{DisplayScreenForm, PathId},
    enums::common::MediaKind,
};
use kiosk_repository::{DisplayScreenRepository, MediaRepository};
use std::sync::Arc;
use tracing::debug;

pub(super) const ROUTER_PREFIX: &str = "/displayscreen_c";

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
    let display = DisplayScreenRepository::get(&state.db).await?;
    let images = MediaRepository::list_by_kind(&state.db, MediaKind::Image).await?;
    let audios = MediaRepository::list_by_kind(&state.db, MediaKind::Audio).await?;
    Ok(pages::display_screen(
        path.id,
        &display,
        &state.tts_languages,
        &images,
        &audios,
    )
    .into_response())
}

async fn submit(
    state: web::Data<Arc<AppState>>,
    path: web::Path<PathId>,
    form: web::Form<DisplayScreenForm>,
) -> WebResult<HttpResponse> {
    if let Some(form) = validated(form.into_inner(), "display screen") {
        let (update, background, audio) = form.into_parts(&state.tts_languages);
        debug!(announce = ?update.announce, "Saving display screen settings");
        DisplayScreenRepository::save(&state.db, update, background, audio).await?;
    }
    Ok(see_other(&format!("{ROUTER_PREFIX}/{}", path.id)))
}
