use crate::idens;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    DatabaseBackend,
};

/// Schema definition of one table, applied by the storage migrator.
pub trait KioskInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;
}

/// All tables, sorted by creation order.
pub fn initializers() -> Vec<Box<dyn KioskInitializer>> {
    let mut initializers: Vec<Box<dyn KioskInitializer>> = vec![
        Box::new(idens::media::Media::Table),
        Box::new(idens::printer::Printer::Table),
        Box::new(idens::touch_store::TouchStore::Table),
        Box::new(idens::display_store::DisplayStore::Table),
        Box::new(idens::slides_c::SlidesC::Table),
        Box::new(idens::vid::Vid::Table),
        Box::new(idens::aliases::Aliases::Table),
        Box::new(idens::slides::Slides::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}
