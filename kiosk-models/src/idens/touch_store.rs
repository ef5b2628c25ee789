use crate::initializer::KioskInitializer;
use kiosk_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(order = super::INIT_SETTINGS_ORDER, create_table = create_touch_store_table))]
pub enum TouchStore {
    Table,
    Id,
    Tmp,
    N,
    Title,
    Hsize,
    Hcolor,
    Hfont,
    Hbg,
    Mbg,
    Tsize,
    Tcolor,
    Tfont,
    Msize,
    Mcolor,
    Mfont,
    Mduration,
    Message,
    Ikey,
    Akey,
}

fn create_touch_store_table(_backend: DatabaseBackend) -> TableCreateStatement {
    let style = |col: TouchStore| ColumnDef::new(col).string_len(64).not_null().to_owned();
    Table::create()
        .table(TouchStore::Table)
        .if_not_exists()
        .col(pk_auto(TouchStore::Id))
        .col(ColumnDef::new(TouchStore::Tmp).integer().not_null().default(1))
        .col(
            ColumnDef::new(TouchStore::N)
                .boolean()
                .not_null()
                .default(true)
                .comment("Tickets are registered instead of printed"),
        )
        .col(ColumnDef::new(TouchStore::Title).string_len(300).not_null())
        .col(style(TouchStore::Hsize))
        .col(style(TouchStore::Hcolor))
        .col(style(TouchStore::Hfont))
        .col(style(TouchStore::Hbg))
        .col(style(TouchStore::Mbg))
        .col(style(TouchStore::Tsize))
        .col(style(TouchStore::Tcolor))
        .col(style(TouchStore::Tfont))
        .col(style(TouchStore::Msize))
        .col(style(TouchStore::Mcolor))
        .col(style(TouchStore::Mfont))
        .col(style(TouchStore::Mduration))
        .col(ColumnDef::new(TouchStore::Message).string_len(300).not_null())
        .col(ColumnDef::new(TouchStore::Ikey).integer().null())
        .col(ColumnDef::new(TouchStore::Akey).integer().null())
        .to_owned()
}
