use crate::initializer::KioskInitializer;
use kiosk_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(order = super::INIT_SETTINGS_ORDER, create_table = create_aliases_table))]
pub enum Aliases {
    Table,
    Id,
    Office,
    Task,
    Ticket,
    Name,
    Number,
}

fn create_aliases_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Aliases::Table)
        .if_not_exists()
        .col(pk_auto(Aliases::Id))
        .col(ColumnDef::new(Aliases::Office).string_len(64).not_null())
        .col(ColumnDef::new(Aliases::Task).string_len(64).not_null())
        .col(ColumnDef::new(Aliases::Ticket).string_len(64).not_null())
        .col(ColumnDef::new(Aliases::Name).string_len(64).not_null())
        .col(ColumnDef::new(Aliases::Number).string_len(64).not_null())
        .to_owned()
}
