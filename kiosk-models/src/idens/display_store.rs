use crate::initializer::KioskInitializer;
use kiosk_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(order = super::INIT_SETTINGS_ORDER, create_table = create_display_store_table))]
pub enum DisplayStore {
    Table,
    Id,
    Tmp,
    Title,
    Hsize,
    Hcolor,
    Hfont,
    Hbg,
    Tsize,
    Tcolor,
    Tfont,
    #[sea_orm(iden = "h2size")]
    H2size,
    #[sea_orm(iden = "h2color")]
    H2color,
    #[sea_orm(iden = "h2font")]
    H2font,
    Ssize,
    Scolor,
    Sfont,
    Mduration,
    Rrate,
    Effect,
    Repeats,
    Anr,
    Anrt,
    Announce,
    Prefix,
    AlwaysShowTicketNumber,
    Bgcolor,
    Ikey,
    Akey,
}

fn create_display_store_table(_backend: DatabaseBackend) -> TableCreateStatement {
    let style = |col: DisplayStore| ColumnDef::new(col).string_len(64).not_null().to_owned();
    Table::create()
        .table(DisplayStore::Table)
        .if_not_exists()
        .col(pk_auto(DisplayStore::Id))
        .col(ColumnDef::new(DisplayStore::Tmp).integer().not_null().default(1))
        .col(ColumnDef::new(DisplayStore::Title).string_len(300).not_null())
        .col(style(DisplayStore::Hsize))
        .col(style(DisplayStore::Hcolor))
        .col(style(DisplayStore::Hfont))
        .col(style(DisplayStore::Hbg))
        .col(style(DisplayStore::Tsize))
        .col(style(DisplayStore::Tcolor))
        .col(style(DisplayStore::Tfont))
        .col(style(DisplayStore::H2size))
        .col(style(DisplayStore::H2color))
        .col(style(DisplayStore::H2font))
        .col(style(DisplayStore::Ssize))
        .col(style(DisplayStore::Scolor))
        .col(style(DisplayStore::Sfont))
        .col(style(DisplayStore::Mduration))
        .col(
            ColumnDef::new(DisplayStore::Rrate)
                .string_len(16)
                .not_null()
                .comment("Refresh rate in milliseconds"),
        )
        .col(style(DisplayStore::Effect))
        .col(style(DisplayStore::Repeats))
        .col(ColumnDef::new(DisplayStore::Anr).integer().not_null().default(2))
        .col(ColumnDef::new(DisplayStore::Anrt).string_len(16).not_null())
        .col(
            ColumnDef::new(DisplayStore::Announce)
                .string_len(255)
                .not_null()
                .default("")
                .comment("Comma separated announcement languages"),
        )
        .col(ColumnDef::new(DisplayStore::Prefix).boolean().not_null().default(false))
        .col(
            ColumnDef::new(DisplayStore::AlwaysShowTicketNumber)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(style(DisplayStore::Bgcolor))
        .col(ColumnDef::new(DisplayStore::Ikey).integer().null())
        .col(ColumnDef::new(DisplayStore::Akey).integer().null())
        .to_owned()
}
