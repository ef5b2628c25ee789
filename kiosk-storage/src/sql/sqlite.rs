use kiosk_error::KioskResult;
use kiosk_models::settings::{KioskDbConfig, Sqlite};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;
use tracing::{info, instrument, log::LevelFilter, warn};

/// Relaxed durability; the tables only hold kiosk customization.
const RELEASE_PRAGMAS: &[&str] = &["PRAGMA synchronous=NORMAL;", "PRAGMA temp_store=MEMORY;"];

/// Open the SQLite pool described by `config`.
///
/// The database directory is created first when `auto_create` is set, the
/// file itself is created by the `mode=rwc` URL parameter.
#[instrument(name = "init_sqlite_db", skip_all)]
pub async fn init_db(config: &Sqlite) -> KioskResult<DatabaseConnection> {
    if config.auto_create {
        tokio::fs::create_dir_all(config.db_dir()).await?;
    }

    let (sql_logging, sql_log_level) = if cfg!(debug_assertions) {
        (true, LevelFilter::Debug)
    } else {
        (false, LevelFilter::Off)
    };
    let mut opts = ConnectOptions::new(config.to_url());
    opts.connect_timeout(Duration::from_millis(config.timeout))
        .idle_timeout(Duration::from_millis(config.idle_timeout))
        .max_lifetime(Duration::from_millis(config.max_lifetime))
        .max_connections(config.max_connections)
        .sqlx_logging(sql_logging)
        .sqlx_logging_level(sql_log_level);

    info!(
        path = %config.db_path(),
        auto_create = config.auto_create,
        "Connecting to SQLite database"
    );
    let db = Database::connect(opts).await?;

    if !cfg!(debug_assertions) {
        for pragma in RELEASE_PRAGMAS {
            if let Err(e) = db.execute_unprepared(pragma).await {
                warn!(pragma, error = %e, "SQLite pragma not applied");
            }
        }
    }
    info!("Connected to SQLite database");

    Ok(db)
}
