use crate::initializer::KioskInitializer;
use kiosk_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(order = super::INIT_SLIDES_ORDER, create_table = create_slides_table))]
pub enum Slides {
    Table,
    Id,
    Title,
    Hsize,
    Hcolor,
    Hfont,
    Hbg,
    Subti,
    Tsize,
    Tcolor,
    Tfont,
    Tbg,
    Ikey,
}

fn create_slides_table(_backend: DatabaseBackend) -> TableCreateStatement {
    let text = |col: Slides| ColumnDef::new(col).string_len(300).not_null().default("").to_owned();
    Table::create()
        .table(Slides::Table)
        .if_not_exists()
        .col(pk_auto(Slides::Id))
        .col(text(Slides::Title))
        .col(text(Slides::Hsize))
        .col(text(Slides::Hcolor))
        .col(text(Slides::Hfont))
        .col(text(Slides::Hbg))
        .col(text(Slides::Subti))
        .col(text(Slides::Tsize))
        .col(text(Slides::Tcolor))
        .col(text(Slides::Tfont))
        .col(text(Slides::Tbg))
        .col(
            ColumnDef::new(Slides::Ikey)
                .integer()
                .null()
                .comment("Background image media id"),
        )
        .to_owned()
}
