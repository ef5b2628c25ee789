//! Lazily created single-row settings tables.
//!
//! Every settings table holds exactly one row at `SINGLETON_ID`. The row is
//! inserted with its defaults on first read. Concurrent first reads race on
//! the fixed key; the losing insert is ignored and both re-read the same row.

use kiosk_error::{storage::StorageError, StorageResult};
use kiosk_models::constants::SINGLETON_ID;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

pub(crate) async fn load_or_create<C, E, A>(db: &C, defaults: A) -> StorageResult<E::Model>
where
    C: ConnectionTrait,
    E: EntityTrait,
    A: ActiveModelTrait<Entity = E>,
    E::Model: IntoActiveModel<A>,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    if let Some(model) = E::find_by_id(SINGLETON_ID).one(db).await? {
        return Ok(model);
    }

    let inserted = E::insert(defaults)
        .on_conflict(OnConflict::new().do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;
    if inserted > 0 {
        tracing::info!(table = E::default().table_name(), "default settings row created");
    }

    E::find_by_id(SINGLETON_ID)
        .one(db)
        .await?
        .ok_or_else(|| StorageError::EntityNotFound(E::default().table_name().to_string()))
}
