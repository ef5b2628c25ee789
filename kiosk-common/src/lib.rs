//! Process-wide application context.
//!
//! Loads settings, installs the logger, brings up the database manager and
//! the web server, and tears them down again on a shutdown signal.

mod logger;

pub use kiosk_error::{KioskError, KioskResult};

use kiosk_models::{
    constants::{DATA_DIR, LOG_DIR},
    settings::Settings,
    DbManager, WebServer,
};
use logger::Logger;
use once_cell::sync::OnceCell;
use std::{
    future::Future,
    path::Path,
    str::FromStr,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
#[cfg(windows)]
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{info, instrument, span, Level};

static APP_CONTEXT: OnceCell<RwLock<KioskAppContext>> = OnceCell::new();

pub struct KioskAppContext {
    settings: Option<Settings>,
    logger: Logger,
    db_manager: Option<Arc<dyn DbManager>>,
    web_server: Option<Arc<dyn WebServer>>,
    log_level: Level,
    shutting_down: AtomicBool,
}

impl KioskAppContext {
    #[inline]
    pub async fn instance() -> KioskResult<RwLockReadGuard<'static, KioskAppContext>> {
        Ok(APP_CONTEXT
            .get()
            .ok_or(KioskError::from("KioskAppContext is not initialized"))?
            .read()
            .await)
    }

    /// Build the global context: settings, logger, database, then web server.
    pub async fn init<D, W>(config: String) -> KioskResult<()>
    where
        D: DbManager + 'static,
        W: WebServer + 'static,
    {
        // Settings come first so the runtime directory applies to ./logs as well.
        let settings = Settings::new(config)?;
        let log_level = resolve_log_level(settings.general.log_level.as_deref())?;
        let mut logger = Logger::new(Some(log_level));

        apply_runtime_dir(&settings.general.runtime_dir)?;

        logger.initialize()?;

        let span = span!(Level::INFO, "init-app");
        let _guard = span.enter();

        ensure_runtime_directories(&settings)?;

        let mut ctx = KioskAppContext {
            log_level,
            shutting_down: AtomicBool::new(false),
            logger,
            settings: Some(settings),
            db_manager: None,
            web_server: None,
        };

        ctx.init_db_manager::<D>().await?;

        ctx.init_web_server::<W>().await?;

        APP_CONTEXT
            .set(RwLock::new(ctx))
            .map_err(|_| KioskError::from("Failed to set KioskAppContext"))?;
        Ok(())
    }

    async fn init_db_manager<D: DbManager + 'static>(&mut self) -> KioskResult<()> {
        self.db_manager = Some(D::init(self.settings()?).await?);
        info!("Database initialized successfully.");
        Ok(())
    }

    async fn init_web_server<W: WebServer + 'static>(&mut self) -> KioskResult<()> {
        self.web_server = Some(W::init(self.settings()?, self.db_manager()?).await?);
        info!("Web server initialized successfully.");
        Ok(())
    }

    #[inline]
    pub fn settings(&self) -> KioskResult<&Settings> {
        self.settings
            .as_ref()
            .ok_or(KioskError::from("Settings not initialized"))
    }

    #[inline]
    pub fn db_manager(&self) -> KioskResult<Arc<dyn DbManager>> {
        self.db_manager
            .as_ref()
            .ok_or(KioskError::from("Database manager not initialized"))
            .map(Arc::clone)
    }

    #[inline]
    pub fn change_log_level(&self, level: Level) {
        if self.logger.get_level() != level {
            self.logger.set_level(level);
            info!(%level, "log level changed");
        }
    }

    /// Block until a termination signal, then stop everything.
    ///
    /// On unix, SIGUSR1 raises the log level to `debug` and SIGUSR2 restores
    /// the configured level without stopping the service.
    pub async fn run(&self) -> KioskResult<()> {
        self.listen_for_shutdown(async { self.graceful_shutdown().await })
            .await
    }

    async fn listen_for_shutdown<F>(&self, shutdown_fn: F) -> KioskResult<()>
    where
        F: Future<Output = KioskResult<()>>,
    {
        #[cfg(unix)]
        {
            let mut sigterm = signal(SignalKind::terminate())?;
            let mut sigint = signal(SignalKind::interrupt())?;
            let mut sighup = signal(SignalKind::hangup())?;
            let mut sigusr1 = signal(SignalKind::user_defined1())?;
            let mut sigusr2 = signal(SignalKind::user_defined2())?;

            loop {
                tokio::select! {
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM signal");
                        break;
                    }
                    _ = sigint.recv() => {
                        info!("Received SIGINT signal");
                        break;
                    }
                    _ = sighup.recv() => {
                        info!("Received SIGHUP signal");
                        break;
                    }
                    _ = sigusr1.recv() => self.change_log_level(Level::DEBUG),
                    _ = sigusr2.recv() => self.change_log_level(self.log_level),
                }
            }
        }

        #[cfg(windows)]
        {
            ctrl_c().await?;
            info!("Received ctrl-c signal");
        }

        shutdown_fn.await
    }

    /// Stop the web server and close the database pool.
    #[instrument(name = "graceful-shutdown", skip_all)]
    pub async fn graceful_shutdown(&self) -> KioskResult<()> {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        info!("Starting graceful shutdown...");

        // The web server drains in-flight requests before the pool goes away.
        if let Some(web_server) = &self.web_server {
            if let Err(e) = web_server.stop().await {
                tracing::error!("Failed to stop web server: {e}");
            }
        }

        if let Some(db_manager) = &self.db_manager {
            if let Err(e) = db_manager.close().await {
                tracing::error!("Failed to close database: {e}");
            }
        }

        info!("Graceful shutdown completed");
        Ok(())
    }
}

/// Configured level, or the build default when unset.
fn resolve_log_level(configured: Option<&str>) -> KioskResult<Level> {
    match configured.map(str::trim).filter(|l| !l.is_empty()) {
        Some(level) => Level::from_str(level)
            .map_err(|_| KioskError::from(format!("Invalid log_level `{level}`"))),
        None if cfg!(debug_assertions) => Ok(Level::DEBUG),
        None => Ok(Level::INFO),
    }
}

/// Switch the process working directory to the configured runtime root.
fn apply_runtime_dir(runtime_dir: &str) -> KioskResult<()> {
    let dir = runtime_dir.trim();
    if dir.is_empty() || dir == "." {
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .map_err(|e| KioskError::from(format!("Failed to create runtime_dir {}: {}", dir, e)))?;

    std::env::set_current_dir(dir).map_err(|e| {
        KioskError::from(format!(
            "Failed to set current_dir to runtime_dir {}: {}",
            dir, e
        ))
    })?;

    Ok(())
}

/// Create the data, upload and log directories. Safe to call repeatedly.
fn ensure_runtime_directories(settings: &Settings) -> KioskResult<()> {
    let dirs = [
        Path::new(DATA_DIR),
        Path::new(LOG_DIR),
        Path::new(&settings.db.sqlite.dir),
        Path::new(&settings.media.upload_dir),
    ];

    for dir in dirs {
        std::fs::create_dir_all(dir).map_err(|e| {
            KioskError::from(format!("Failed to create directory {}: {}", dir.display(), e))
        })?;
    }

    Ok(())
}
