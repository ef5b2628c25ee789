use crate::{singleton::load_or_create, MediaRepository};
use kiosk_error::{storage::StorageError, StorageResult};
use kiosk_models::{
    domain::prelude::{MediaRef, NewTouchScreen, UpdateTouchScreen},
    entities::prelude::{TouchStore, TouchStoreActiveModel, TouchStoreModel},
    enums::common::MediaKind,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, IntoActiveModel, Set, TransactionTrait,
};

pub struct TouchScreenRepository;

impl TouchScreenRepository {
    /// Touch screen settings, created with defaults on first access.
    pub async fn get<C>(db: &C) -> StorageResult<TouchStoreModel>
    where
        C: ConnectionTrait,
    {
        load_or_create::<_, TouchStore, _>(db, NewTouchScreen::default().into_active_model())
            .await
    }

    /// Apply a partial update to the settings row.
    pub async fn update<C>(db: &C, update: UpdateTouchScreen) -> StorageResult<TouchStoreModel>
    where
        C: ConnectionTrait,
    {
        let current = Self::get(db).await?;
        let mut active: TouchStoreActiveModel = update.into_active_model();
        if !active.is_changed() {
            return Ok(current);
        }
        active.id = Set(current.id);
        Ok(active.update(db).await?)
    }

    /// Set the registered flag `n`.
    pub async fn set_registered<C>(db: &C, registered: bool) -> StorageResult<TouchStoreModel>
    where
        C: ConnectionTrait,
    {
        let current = Self::get(db).await?;
        if current.n == registered {
            return Ok(current);
        }
        let mut active: TouchStoreActiveModel = current.into_active_model();
        active.n = Set(registered);
        Ok(active.update(db).await?)
    }

    /// Save a touch screen form, resolving background and audio selections
    /// in the same transaction.
    pub async fn save<C>(
        db: &C,
        mut update: UpdateTouchScreen,
        background: Option<MediaRef>,
        audio: Option<MediaRef>,
    ) -> StorageResult<TouchStoreModel>
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
