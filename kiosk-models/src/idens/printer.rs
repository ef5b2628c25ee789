use crate::initializer::KioskInitializer;
use kiosk_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(order = super::INIT_SETTINGS_ORDER, create_table = create_printer_table))]
pub enum Printer {
    Table,
    Id,
    Value,
    Active,
    Vendor,
    Product,
    InEp,
    OutEp,
    Langu,
    Scale,
    Header,
}

fn create_printer_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Printer::Table)
        .if_not_exists()
        .col(pk_auto(Printer::Id))
        .col(
            ColumnDef::new(Printer::Value)
                .small_integer()
                .not_null()
                .default(1)
                .comment("Ticket kind: 1 registered, 2 printed"),
        )
        .col(ColumnDef::new(Printer::Active).boolean().not_null().default(false))
        .col(ColumnDef::new(Printer::Vendor).integer().not_null().default(0))
        .col(ColumnDef::new(Printer::Product).integer().not_null().default(0))
        .col(ColumnDef::new(Printer::InEp).integer().not_null().default(0))
        .col(ColumnDef::new(Printer::OutEp).integer().not_null().default(0))
        .col(ColumnDef::new(Printer::Langu).string_len(8).not_null().default("en"))
        .col(ColumnDef::new(Printer::Scale).integer().not_null().default(1))
        .col(
            ColumnDef::new(Printer::Header)
                .string_len(128)
                .not_null()
                .default("")
                .comment("Printed ticket header"),
        )
        .to_owned()
}
