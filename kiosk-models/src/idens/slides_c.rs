use crate::initializer::KioskInitializer;
use kiosk_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    name = "slides_c",
    order = super::INIT_SETTINGS_ORDER,
    create_table = create_slideshow_table
))]
pub enum SlidesC {
    Table,
    Id,
    Status,
    Rotation,
    Navigation,
    Effect,
}

fn create_slideshow_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(SlidesC::Table)
        .if_not_exists()
        .col(pk_auto(SlidesC::Id))
        .col(ColumnDef::new(SlidesC::Status).boolean().not_null().default(false))
        .col(
            ColumnDef::new(SlidesC::Rotation)
                .string_len(16)
                .not_null()
                .comment("Rotation interval in milliseconds"),
        )
        .col(
            ColumnDef::new(SlidesC::Navigation)
                .small_integer()
                .not_null()
                .default(1),
        )
        .col(ColumnDef::new(SlidesC::Effect).string_len(32).not_null())
        .to_owned()
}
