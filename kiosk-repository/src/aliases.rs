use crate::singleton::load_or_create;
use kiosk_error::StorageResult;
use kiosk_models::{
    domain::prelude::{NewAliases, UpdateAliases},
    entities::prelude::{Aliases, AliasesActiveModel, AliasesModel},
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, IntoActiveModel, Set};

pub struct AliasesRepository;

impl AliasesRepository {
    pub async fn get<C>(db: &C) -> StorageResult<AliasesModel>
    where
        C: ConnectionTrait,
    {
        load_or_create::<_, Aliases, _>(db, NewAliases::default().into_active_model()).await
    }

    pub async fn save<C>(db: &C, update: UpdateAliases) -> StorageResult<AliasesModel>
    where
        C: ConnectionTrait,
    {
        let current = Self::get(db).await?;
        let mut active: AliasesActiveModel = update.into_active_model();
        if !active.is_changed() {
            return Ok(current);
        }
        active.id = Set(current.id);
        Ok(active.update(db).await?)
    }
}
