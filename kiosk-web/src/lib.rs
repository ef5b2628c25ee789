mod api;
mod pages;

use actix_web::{
    dev::{Server, ServerHandle},
    middleware::{Compress, Logger, NormalizePath},
    web::Data,
    App, HttpServer,
};
use async_trait::async_trait;
use kiosk_error::{init::InitContextError, KioskError, KioskResult};
use kiosk_models::{settings::Settings, DbManager, WebServer};
use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

pub use api::configure_app;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    upload_dir: PathBuf,
    max_upload_bytes: usize,
    tts_languages: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, settings: &Settings) -> Self {
        AppState {
            db,
            upload_dir: PathBuf::from(&settings.media.upload_dir),
            max_upload_bytes: settings.media.max_upload_bytes,
            tts_languages: Arc::new(settings.display.tts_languages.clone()),
        }
    }
}

#[derive(Clone)]
pub struct KioskWebServer {
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl KioskWebServer {
    async fn create_server(
        settings: &Settings,
        db_manager: Arc<dyn DbManager>,
    ) -> KioskResult<Server> {
        let db = db_manager.get_connection()?;
        tokio::fs::create_dir_all(&settings.media.upload_dir).await?;

        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let worker_count = settings.web.get_worker_count();
        let state = AppState::new(db, settings);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(Data::new(Arc::new(state.clone())))
                .wrap(Logger::default())
                .wrap(Compress::default())
                .wrap(NormalizePath::trim())
                .configure(configure_app)
        })
        .workers(worker_count)
        .bind(&addr)
        .map_err(|e| KioskError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        info!(%addr, workers = worker_count, "Web server listening");
        Ok(server.run())
    }
}

#[async_trait]
impl WebServer for KioskWebServer {
    #[inline]
    #[instrument(name = "init-web-server", skip_all)]
    async fn init(
        settings: &Settings,
        db_manager: Arc<dyn DbManager>,
    ) -> KioskResult<Arc<Self>, InitContextError> {
        let server = Self::create_server(settings, db_manager)
            .await
            .map_err(|e| {
                InitContextError::Primitive(format!("Failed to create web server: {e}"))
            })?;
        let server_handle = server.handle();

        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed to start");
            }
        });

        Ok(Arc::new(KioskWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        }))
    }

    #[inline]
    #[instrument(name = "web-server-stop", skip_all)]
    async fn stop(&self) -> KioskResult<()> {
        info!("Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped");

        Ok(())
    }
}
