use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::{storage::StorageError, KioskError};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("BadRequest: `{0}`")]
    BadRequest(String),
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("InternalError: `{0}`")]
    InternalError(String),
    #[error("DBError: `{0}`")]
    StorageError(#[from] StorageError),
    #[error("MultipartError: `{0}`")]
    MultipartError(String),
}

impl From<std::io::Error> for WebError {
    fn from(e: std::io::Error) -> Self {
        WebError::InternalError(e.to_string())
    }
}

impl From<KioskError> for WebError {
    fn from(e: KioskError) -> Self {
        match e {
            KioskError::StorageError(StorageError::EntityNotFound(msg)) => WebError::NotFound(msg),
            other => WebError::InternalError(other.to_string()),
        }
    }
}

impl From<actix_multipart::MultipartError> for WebError {
    fn from(e: actix_multipart::MultipartError) -> Self {
        WebError::MultipartError(e.to_string())
    }
}

impl WebError {
    fn label(&self) -> &'static str {
        match self {
            WebError::BadRequest(_) => "Bad Request",
            WebError::NotFound(_) => "Not Found",
            WebError::InternalError(_) => "Internal Server Error",
            WebError::StorageError(_) => "Storage Error",
            WebError::MultipartError(_) => "Multipart Error",
        }
    }
}

/// Rendered as `{"error": <label>, "message": <detail>}`.
impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::InternalError(_)
            | WebError::StorageError(_)
            | WebError::MultipartError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            WebError::MultipartError(msg) => msg.clone(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.label(),
            "message": message,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            WebError::BadRequest("x".into()).error_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebError::NotFound("media".into()).error_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::StorageError(StorageError::StorageUnavailable)
                .error_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_entity_not_found_becomes_not_found() {
        let err: WebError =
            KioskError::StorageError(StorageError::EntityNotFound("slide".into())).into();
        assert!(matches!(err, WebError::NotFound(ref m) if m == "slide"));
    }
}
