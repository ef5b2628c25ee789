use crate::{singleton::load_or_create, MediaRepository, SlideshowRepository};
use kiosk_error::{storage::StorageError, StorageResult};
use kiosk_models::{
    domain::prelude::{NewVideo, UpdateVideo},
    entities::prelude::{Video, VideoActiveModel, VideoModel},
    enums::common::{MediaKind, Toggle},
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, IntoActiveModel, Set, TransactionTrait};
use tracing::warn;

pub struct VideoRepository;

impl VideoRepository {
    /// Video player settings, created with defaults on first access.
    pub async fn get<C>(db: &C) -> StorageResult<VideoModel>
    where
        C: ConnectionTrait,
    {
        load_or_create::<_, Video, _>(db, NewVideo::default().into_active_model()).await
    }

    pub async fn update<C>(db: &C, update: UpdateVideo) -> StorageResult<VideoModel>
    where
        C: ConnectionTrait,
    {
        let current = Self::get(db).await?;
        let mut active: VideoActiveModel = update.into_active_model();
        if !active.is_changed() {
            return Ok(current);
        }
        active.id = Set(current.id);
        Ok(active.update(db).await?)
    }

    pub async fn disable<C>(db: &C) -> StorageResult<VideoModel>
    where
        C: ConnectionTrait,
    {
        Self::update(
            db,
            UpdateVideo {
                enable: Some(Toggle::Disabled),
                ..Default::default()
            },
        )
        .await
    }

    /// Save video settings.
    ///
    /// `video` selects a media row of kind video; it is copied into
    /// `vname`/`vkey` and marked used. An unknown or non-video id is ignored.
    /// Enabling the player disables the slideshow.
    pub async fn save<C>(
        db: &C,
        mut update: UpdateVideo,
        video: Option<i32>,
    ) -> StorageResult<VideoModel>
    where
        C: TransactionTrait,
    {
        Ok(db
            .transaction::<_, _, StorageError>(|txn| {
                Box::pin(async move {
                    if let Some(id) = video {
                        match MediaRepository::get(txn, id).await? {
                            Some(media) if media.is(MediaKind::Video) => {
                                let media = MediaRepository::mark_used(txn, media).await?;
                                update.vname = Some(media.name);
                                update.vkey = Some(Some(media.id));
                            }
                            _ => warn!(media_id = id, "selected video does not exist, ignored"),
                        }
                    }
                    let video = Self::update(txn, update).await?;
                    if video.enable.is_enabled() {
                        SlideshowRepository::disable(txn).await?;
                    }
                    Ok(video)
                })
            })
            .await?)
    }
}
