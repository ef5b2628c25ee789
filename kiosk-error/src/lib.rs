pub mod init;
pub mod storage;
pub mod web;

use anyhow::Error as AnyhowError;
use config::ConfigError;
use init::InitContextError;
use sea_orm::{DbErr, TransactionError};
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use storage::StorageError;
use thiserror::Error;
use web::WebError;

pub type KioskResult<T, E = KioskError> = anyhow::Result<T, E>;
pub type WebResult<T, E = WebError> = anyhow::Result<T, E>;
pub type StorageResult<T, E = StorageError> = Result<T, E>;

#[derive(Error, Debug, Default)]
pub enum KioskError {
    #[error("service unavailable")]
    #[default]
    ServiceUnavailable,
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Msg(String),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    StorageError(#[from] StorageError),
    #[error("{0}")]
    InitContextError(#[from] InitContextError),
    #[error("{0}")]
    WebError(#[from] WebError),
}

impl From<String> for KioskError {
    #[inline]
    fn from(e: String) -> Self {
        KioskError::Msg(e)
    }
}

impl From<&str> for KioskError {
    #[inline]
    fn from(e: &str) -> Self {
        KioskError::Msg(e.to_string())
    }
}

impl From<DbErr> for KioskError {
    #[inline]
    fn from(e: DbErr) -> Self {
        KioskError::StorageError(StorageError::DBError(e))
    }
}

impl From<TransactionError<StorageError>> for KioskError {
    #[inline]
    fn from(e: TransactionError<StorageError>) -> Self {
        match e {
            TransactionError::Connection(db_err) => KioskError::from(db_err),
            TransactionError::Transaction(err) => KioskError::StorageError(err),
        }
    }
}
