use crate::initializer::KioskInitializer;
use kiosk_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(order = super::INIT_SETTINGS_ORDER, create_table = create_vid_table))]
pub enum Vid {
    Table,
    Id,
    Enable,
    Mute,
    Controls,
    Ar,
    Vname,
    Vkey,
}

fn create_vid_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Vid::Table)
        .if_not_exists()
        .col(pk_auto(Vid::Id))
        .col(ColumnDef::new(Vid::Enable).small_integer().not_null().default(2))
        .col(ColumnDef::new(Vid::Mute).small_integer().not_null().default(2))
        .col(ColumnDef::new(Vid::Controls).small_integer().not_null().default(1))
        .col(
            ColumnDef::new(Vid::Ar)
                .small_integer()
                .not_null()
                .default(1)
                .comment("Aspect ratio: 1 auto, 2 16:9, 3 4:3"),
        )
        .col(ColumnDef::new(Vid::Vname).string_len(255).not_null().default(""))
        .col(ColumnDef::new(Vid::Vkey).integer().null())
        .to_owned()
}
