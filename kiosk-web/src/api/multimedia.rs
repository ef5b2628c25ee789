//! Media library: list, upload and delete files per media kind.
//!
//! `<kind>` is the numeric [`MediaKind`] code. Uploads arrive as a multipart
//! form with the file in field `mf`; rejected uploads leave no row and no file.

use super::see_other;
use crate::{pages, AppState};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::StreamExt;
use kiosk_error::{web::WebError, WebResult};
use kiosk_models::{
    domain::prelude::{sanitize_file_name, NewMedia, PathId, PathKind},
    enums::common::MediaKind,
};
use kiosk_repository::MediaRepository;
use std::sync::Arc;
use tracing::{info, warn};

pub(super) const ROUTER_PREFIX: &str = "/multimedia";

/// Multipart field carrying the uploaded file.
const UPLOAD_FIELD: &str = "mf";

pub(super) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("{ROUTER_PREFIX}/{{kind}}"))
            .route(web::get().to(view))
            .route(web::post().to(upload)),
    )
    .route("/multi_del/{id}", web::get().to(delete));
}

#[inline]
fn kind_path(kind: MediaKind) -> String {
    format!("{ROUTER_PREFIX}/{}", kind.code())
}

async fn view(
    state: web::Data<Arc<AppState>>,
    path: web::Path<PathKind>,
) -> WebResult<HttpResponse> {
    let kind = MediaKind::from_code(path.kind)
        .ok_or_else(|| WebError::NotFound(format!("media kind {}", path.kind)))?;
    let items = MediaRepository::list_by_kind(&state.db, kind).await?;
    Ok(pages::multimedia(kind, &items).into_response())
}

async fn upload(
    state: web::Data<Arc<AppState>>,
    path: web::Path<PathKind>,
    mut multipart: Multipart,
) -> WebResult<HttpResponse> {
    let Some(kind) = MediaKind::from_code(path.kind) else {
        warn!(kind = path.kind, "Rejected upload for unknown media kind");
        return Ok(see_other(&kind_path(MediaKind::Image)));
    };
    let location = kind_path(kind);

    let upload = match read_upload(&mut multipart, state.max_upload_bytes).await {
        Ok(upload) => upload,
        Err(e) => {
            warn!(kind = kind.name(), error = %e, "Rejected upload");
            return Ok(see_other(&location));
        }
    };
    let Some(name) = sanitize_file_name(&upload.file_name).filter(|name| kind.accepts(name))
    else {
        warn!(
            kind = kind.name(),
            file = %upload.file_name,
            "Rejected upload with disallowed file name"
        );
        return Ok(see_other(&location));
    };

    let target = state.upload_dir.join(&name);
    if MediaRepository::find_by_name(&state.db, &name).await?.is_some()
        || tokio::fs::try_exists(&target).await?
    {
        warn!(file = %name, "Rejected upload with duplicate name");
        return Ok(see_other(&location));
    }

    tokio::fs::create_dir_all(&state.upload_dir).await?;
    tokio::fs::write(&target, &upload.bytes).await?;
    match MediaRepository::create(&state.db, NewMedia::new(name, kind)).await {
        Ok(media) => {
            info!(id = media.id, file = %media.name, size = upload.bytes.len(), "Media uploaded");
            Ok(see_other(&location))
        }
        Err(e) => {
            if let Err(io) = tokio::fs::remove_file(&target).await {
                warn!(file = %target.display(), error = %io, "Could not remove orphaned upload");
            }
            Err(e.into())
        }
    }
}

/// Remove the row, then the stored file. A missing file is only logged.
async fn delete(
    state: web::Data<Arc<AppState>>,
    path: web::Path<PathId>,
) -> WebResult<HttpResponse> {
    let Some(media) = MediaRepository::delete(&state.db, path.id).await? else {
        warn!(id = path.id, "Ignored removal of unknown media");
        return Ok(see_other(&kind_path(MediaKind::Image)));
    };

    let file = state.upload_dir.join(&media.name);
    if let Err(e) = tokio::fs::remove_file(&file).await {
        warn!(file = %file.display(), error = %e, "Could not remove media file");
    }
    info!(id = media.id, file = %media.name, "Media deleted");
    Ok(see_other(&kind_path(
        media.kind().unwrap_or(MediaKind::Image),
    )))
}

struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

/// Read the `mf` file field into memory with a strict size limit.
///
/// # Errors
/// `BadRequest` when the field is missing, unnamed, empty or too large;
/// `MultipartError` when the body is malformed.
async fn read_upload(multipart: &mut Multipart, max_bytes: usize) -> WebResult<Upload> {
    while let Some(field) = multipart.next().await {
        let mut field = field?;
        if field.name() != Some(UPLOAD_FIELD) {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string)
            .ok_or_else(|| WebError::BadRequest("Upload has no file name".to_string()))?;

        let mut bytes: Vec<u8> = Vec::new();
        let mut total: usize = 0;
        while let Some(chunk) = field.next().await {
            let data = chunk?;
            total = total.saturating_add(data.len());
            if total > max_bytes {
                return Err(WebError::BadRequest(format!(
                    "File too large: {total} bytes (max {max_bytes})"
                )));
            }
            bytes.extend_from_slice(&data);
        }

        if bytes.is_empty() {
            return Err(WebError::BadRequest("Empty file uploaded".to_string()));
        }
        return Ok(Upload { file_name, bytes });
    }

    Err(WebError::BadRequest("No file uploaded".to_string()))
}
