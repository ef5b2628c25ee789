use super::{see_other, validated};
use crate::{pages, AppState};
use actix_web::{web, HttpResponse};
use kiosk_error::WebResult;
use kiosk_models::{
    domain::prelude::{PathId, SlideForm, SlideshowForm},
    enums::common::MediaKind,
};
use kiosk_repository::{MediaRepository, SlideRepository, SlideshowRepository};
use std::sync::Arc;
use tracing::{info, warn};

pub(super) const ROUTER_PREFIX: &str = "/slideshow";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(ROUTER_PREFIX, web::get().to(view))
        .route("/slide_a", web::post().to(add_slide))
        .route("/slide_e/{id}", web::post().to(edit_slide))
        .route("/slide_c", web::post().to(update_settings))
        .route("/slide_r/{id}", web::get().to(remove_slide));
}

async fn view(state: web::Data<Arc<AppState>>) -> WebResult<HttpResponse> {
    let settings = SlideshowRepository::get(&state.db).await?;
    let slides = SlideRepository::list(&state.db).await?;
    let images = MediaRepository::list_by_kind(&state.db, MediaKind::Image).await?;
    Ok(pages::slideshow(&settings, &slides, &images).into_response())
}

async fn add_slide(
    state: web::Data<Arc<AppState>>,
    form: web::Form<SlideForm>,
) -> WebResult<HttpResponse> {
    if let Some(form) = validated(form.into_inner(), "slide") {
        let (slide, background) = form.into_new();
        let slide = SlideRepository::create(&state.db, slide, background).await?;
        info!(id = slide.id, "Slide added");
    }
    Ok(see_other(ROUTER_PREFIX))
}

async fn edit_slide(
    state: web::Data<Arc<AppState>>,
    path: web::Path<PathId>,
    form: web::Form<SlideForm>,
) -> WebResult<HttpResponse> {
    if let Some(form) = validated(form.into_inner(), "slide") {
        let (update, background) = form.into_update();
        if SlideRepository::update(&state.db, path.id, update, background)
            .await?
            .is_none()
        {
            warn!(id = path.id, "Ignored edit of unknown slide");
        }
    }
    Ok(see_other(ROUTER_PREFIX))
}

/// Slideshow-wide settings. Enabling the slideshow turns the video player off.
async fn update_settings(
    state: web::Data<Arc<AppState>>,
    form: web::Form<SlideshowForm>,
) -> WebResult<HttpResponse> {
    let Some(form) = validated(form.into_inner(), "slideshow") else {
        return Ok(see_other(ROUTER_PREFIX));
    };
    match form.into_update() {
        Ok(update) => {
            SlideshowRepository::save(&state.db, update).await?;
        }
        Err(e) => warn!(error = %e, "Rejected slideshow settings"),
    }
    Ok(see_other(ROUTER_PREFIX))
}

async fn remove_slide(
    state: web::Data<Arc<AppState>>,
    path: web::Path<PathId>,
) -> WebResult<HttpResponse> {
    if SlideRepository::delete(&state.db, path.id).await? {
        info!(id = path.id, "Slide removed");
    } else {
        warn!(id = path.id, "Ignored removal of unknown slide");
    }
    Ok(see_other(ROUTER_PREFIX))
}
