use crate::{singleton::load_or_create, MediaRepository};
use kiosk_error::{storage::StorageError, StorageResult};
use kiosk_models::{
    domain::prelude::{MediaRef, NewDisplayScreen, UpdateDisplayScreen},
    entities::prelude::{DisplayStore, DisplayStoreActiveModel, DisplayStoreModel},
    enums::common::MediaKind,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, IntoActiveModel, Set, TransactionTrait};

pub struct DisplayScreenRepository;

impl DisplayScreenRepository {
    /// Display screen settings, created with defaults on first access.
    pub async fn get<C>(db: &C) -> StorageResult<DisplayStoreModel>
    where
        C: ConnectionTrait,
    {
        load_or_create::<_, DisplayStore, _>(db, NewDisplayScreen::default().into_active_model())
            .await
    }

    pub async fn update<C>(
        db: &C,
        update: UpdateDisplayScreen,
    ) -> StorageResult<DisplayStoreModel>
    where
        C: ConnectionTrait,
    {
        let current = Self::get(db).await?;
        let mut active: DisplayStoreActiveModel = update.into_active_model();
        if !active.is_changed() {
            return Ok(current);
        }
        active.id = Set(current.id);
        Ok(active.update(db).await?)
    }

    pub async fn save<C>(
        db: &C,
        mut update: UpdateDisplayScreen,
        background: Option<MediaRef>,
        audio: Option<MediaRef>,
    ) -> StorageResult<DisplayStoreModel>
    where
        C: TransactionTrait,
    {
        Ok(db
            .transaction::<_, _, StorageError>(|txn| {
                Box::pin(async move {
                    update.ikey = MediaRepository::resolve(txn, background, MediaKind::Image).await?;
                    update.akey = MediaRepository::resolve(txn, audio, MediaKind::Audio).await?;
                    Self::update(txn, update).await
                })
            })
            .await?)
    }
}
