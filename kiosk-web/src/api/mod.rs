//! Route table of the customization service.
//!
//! Every POST handler answers with `303 See Other` pointing at the GET view
//! of the same page, including when the submission is rejected.

mod alias;
mod customize;
mod display_screen;
mod health;
mod multimedia;
mod slideshow;
mod ticket;
mod touch_screen;
mod video;

use actix_web::{error::InternalError, http::header, web, HttpResponse};
use tracing::warn;
use validator::Validate;

/// Register the form decoder and every route on `cfg`.
///
/// Expects an `AppState` in app data.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .configure(health::configure_routes)
        .configure(customize::configure_routes)
        .configure(ticket::configure_routes)
        .configure(video::configure_routes)
        .configure(slideshow::configure_routes)
        .configure(multimedia::configure_routes)
        .configure(display_screen::configure_routes)
        .configure(touch_screen::configure_routes)
        .configure(alias::configure_routes);
}

/// Undecodable forms are answered like any other rejected submission.
fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req| {
        warn!(path = req.path(), error = %err, "Rejected undecodable form");
        let location = view_path(req.path());
        InternalError::from_response(err, see_other(&location)).into()
    })
}

/// GET view a form posted to `path` returns to.
fn view_path(path: &str) -> String {
    if path.starts_with("/slide_") {
        slideshow::ROUTER_PREFIX.to_string()
    } else {
        path.to_string()
    }
}

#[inline]
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Keep `form` only when its validator rules pass.
pub(crate) fn validated<T: Validate>(form: T, name: &str) -> Option<T> {
    match form.validate() {
        Ok(()) => Some(form),
        Err(e) => {
            warn!(form = name, error = %e, "Rejected invalid form");
            None
        }
    }
}
