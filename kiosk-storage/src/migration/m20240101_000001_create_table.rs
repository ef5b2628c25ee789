//! Initial schema: one table per registered initializer, in initializer order.

use kiosk_models::initializer::initializers;
use sea_orm_migration::prelude::*;
use tracing::{debug, instrument};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[instrument(name = "migrate-up", skip_all)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let tables = initializers();

        for table in &tables {
            manager
                .create_table(table.to_create_table_stmt(backend))
                .await?;
            debug!(table = table.name(), "created table");
        }
        let indexes: Vec<IndexCreateStatement> = tables
            .iter()
            .filter_map(|table| table.to_create_indexes_stmt(backend))
            .flatten()
            .collect();
        for stmt in indexes {
            manager.create_index(stmt).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        for table in initializers().iter().rev() {
            manager.drop_table(table.to_drop_table_stmt(backend)).await?;
        }
        Ok(())
    }
}
