pub mod constants;
pub mod domain;
pub mod entities;
pub mod enums;
mod idens;
pub mod initializer;
pub mod settings;

use async_trait::async_trait;
use downcast_rs::{impl_downcast, DowncastSync};
use kiosk_error::{init::InitContextError, storage::StorageError, KioskResult};
use sea_orm::DatabaseConnection;
use settings::Settings;
use std::sync::Arc;

impl_downcast!(sync WebServer);
impl_downcast!(sync DbManager);

/// Database management interface.
///
/// Owns the connection pool and runs the schema migration on startup.
#[async_trait]
pub trait DbManager: DowncastSync + Send + Sync + 'static {
    /// Connects to the configured database and creates missing tables.
    async fn init(settings: &Settings) -> KioskResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Pooled connection handle; cloning it is cheap.
    fn get_connection(&self) -> KioskResult<DatabaseConnection, StorageError>;

    /// Gracefully closes all database connections.
    async fn close(&self) -> KioskResult<()>;
}

/// HTTP front of the customization service.
#[async_trait]
pub trait WebServer: DowncastSync + Send + Sync + 'static {
    /// Binds the listener and starts serving in the background.
    ///
    /// # Arguments
    /// * `settings` - The application settings
    /// * `db_manager` - Source of database connections for request handlers
    async fn init(
        settings: &Settings,
        db_manager: Arc<dyn DbManager>,
    ) -> KioskResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Gracefully stops the web server.
    async fn stop(&self) -> KioskResult<()>;
}
