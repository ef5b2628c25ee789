mod migration;
mod sql;

use async_trait::async_trait;
use kiosk_error::{init::InitContextError, storage::StorageError, KioskResult};
use kiosk_models::{
    settings::{Settings, Sqlite},
    DbManager,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};

/// Connect to SQLite and bring the schema up to date.
pub async fn open_database(config: &Sqlite) -> KioskResult<DatabaseConnection> {
    let db = sql::sqlite::init_db(config).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Global database manager struct
pub struct KioskDbManager {
    db_conn: Option<DatabaseConnection>,
}

impl KioskDbManager {
    /// Wrap an already opened connection.
    pub fn from_connection(db_conn: DatabaseConnection) -> Arc<Self> {
        Arc::new(KioskDbManager {
            db_conn: Some(db_conn),
        })
    }
}

#[async_trait]
impl DbManager for KioskDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> KioskResult<Arc<Self>, InitContextError> {
        let db_conn = open_database(&settings.db.sqlite).await.map_err(|e| {
            InitContextError::Primitive(format!("Failed to init SQLite database: {e}"))
        })?;

        info!("Database manager initialized successfully");
        Ok(Self::from_connection(db_conn))
    }

    #[inline]
    fn get_connection(&self) -> KioskResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> KioskResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};

    fn sqlite_in(dir: &std::path::Path) -> Sqlite {
        Sqlite {
            dir: dir.join("db").to_string_lossy().into_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_open_database_creates_all_tables() {
        let tmp = tempfile::tempdir().unwrap();
        let db = open_database(&sqlite_in(tmp.path())).await.unwrap();

        let rows = db
            .query_all(Statement::from_string(
                db.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type = 'table'".to_string(),
            ))
            .await
            .unwrap();
        let tables = rows
            .iter()
            .filter_map(|row| row.try_get::<String>("", "name").ok())
            .collect::<Vec<_>>();
        for table in [
            "printer",
            "touch_store",
            "display_store",
            "slides_c",
            "vid",
            "aliases",
            "media",
            "slides",
        ] {
            assert!(tables.iter().any(|t| t == table), "missing table {table}");
        }
    }

    #[tokio::test]
    async fn test_migration_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let config = sqlite_in(tmp.path());
        let db = open_database(&config).await.unwrap();
        db.close().await.unwrap();

        let manager = KioskDbManager::from_connection(open_database(&config).await.unwrap());
        assert!(manager.get_connection().is_ok());
        manager.close().await.unwrap();
    }
}
