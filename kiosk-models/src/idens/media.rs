use crate::initializer::KioskInitializer;
use kiosk_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_MEDIA_ORDER,
    create_table = create_media_table,
    create_indexes = create_media_indexes
))]
pub enum Media {
    Table,
    Id,
    Name,
    Img,
    Audio,
    Vid,
    Used,
}

fn create_media_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Media::Table)
        .if_not_exists()
        .col(pk_auto(Media::Id))
        .col(
            ColumnDef::new(Media::Name)
                .string_len(255)
                .not_null()
                .unique_key()
                .comment("Stored file name"),
        )
        .col(ColumnDef::new(Media::Img).boolean().not_null().default(false))
        .col(ColumnDef::new(Media::Audio).boolean().not_null().default(false))
        .col(ColumnDef::new(Media::Vid).boolean().not_null().default(false))
        .col(ColumnDef::new(Media::Used).boolean().not_null().default(false))
        .to_owned()
}

fn create_media_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_media_used")
        .table(Media::Table)
        .col(Media::Used)
        .if_not_exists()
        .to_owned()])
}
