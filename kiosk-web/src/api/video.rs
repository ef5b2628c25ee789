use super::{see_other, validated};
use crate::{pages, AppState};
use actix_web::{web, HttpResponse};
use kiosk_error::WebResult;
use kiosk_models::{domain::prelude::VideoForm, enums::common::MediaKind};
use kiosk_repository::{MediaRepository, VideoRepository};
use std::sync::Arc;
use tracing::warn;

pub(super) const ROUTER_PREFIX: &str = "/video";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(ROUTER_PREFIX, web::get().to(view))
        .route(ROUTER_PREFIX, web::post().to(submit));
}

async fn view(state: web::Data<Arc<AppState>>) -> WebResult<HttpResponse> {
    let video = VideoRepository::get(&state.db).await?;
    let videos = MediaRepository::list_by_kind(&state.db, MediaKind::Video).await?;
    Ok(pages::video(&video, &videos).into_response())
}

async fn submit(
    state: web::Data<Arc<AppState>>,
    form: web::Form<VideoForm>,
) -> WebResult<HttpResponse> {
    let Some(form) = validated(form.into_inner(), "video") else {
        return Ok(see_other(ROUTER_PREFIX));
    };
    match form.into_parts() {
        Ok((update, video)) => {
            VideoRepository::save(&state.db, update, video).await?;
        }
        Err(e) => warn!(error = %e, "Rejected video settings"),
    }
    Ok(see_other(ROUTER_PREFIX))
}
