use crate::{singleton::load_or_create, VideoRepository};
use kiosk_error::{storage::StorageError, StorageResult};
use kiosk_models::{
    domain::prelude::{NewSlideshow, UpdateSlideshow},
    entities::prelude::{Slideshow, SlideshowActiveModel, SlideshowModel},
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, IntoActiveModel, Set, TransactionTrait};

pub struct SlideshowRepository;

impl SlideshowRepository {
    /// Slideshow-wide settings, created with defaults on first access.
    pub async fn get<C>(db: &C) -> StorageResult<SlideshowModel>
    where
        C: ConnectionTrait,
    {
        load_or_create::<_, Slideshow, _>(db, NewSlideshow::default().into_active_model()).await
    }

    pub async fn update<C>(db: &C, update: UpdateSlideshow) -> StorageResult<SlideshowModel>
    where
        C: ConnectionTrait,
    {
        let current = Self::get(db).await?;
        let mut active: SlideshowActiveModel = update.into_active_model();
        if !active.is_changed() {
            return Ok(current);
        }
        active.id = Set(current.id);
        Ok(active.update(db).await?)
    }

    /// Turn the slideshow off without touching its other settings.
    pub async fn disable<C>(db: &C) -> StorageResult<SlideshowModel>
    where
        C: ConnectionTrait,
    {
        Self::update(
            db,
            UpdateSlideshow {
                status: Some(false),
                ..Default::default()
            },
        )
        .await
    }

    /// Save slideshow settings. Enabling the slideshow disables the video player.
    pub async fn save<C>(db: &C, update: UpdateSlideshow) -> StorageResult<SlideshowModel>
    where
        C: TransactionTrait,
    {
        Ok(db
            .transaction::<_, _, StorageError>(|txn| {
                Box::pin(async move {
                    let slideshow = Self::update(txn, update).await?;
                    if slideshow.status {
                        VideoRepository::disable(txn).await?;
                    }
                    Ok(slideshow)
                })
            })
            .await?)
    }
}
