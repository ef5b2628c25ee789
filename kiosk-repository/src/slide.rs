use crate::MediaRepository;
use kiosk_error::{storage::StorageError, StorageResult};
use kiosk_models::{
    domain::prelude::{MediaRef, NewSlide, UpdateSlide},
    entities::prelude::{Slide, SlideActiveModel, SlideColumn, SlideModel},
    enums::common::MediaKind,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set,
    TransactionTrait,
};

pub struct SlideRepository;

impl SlideRepository {
    /// All slides in display order.
    pub async fn list<C>(db: &C) -> StorageResult<Vec<SlideModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Slide::find()
            .order_by_asc(SlideColumn::Id)
            .all(db)
            .await?)
    }

    pub async fn get<C>(db: &C, id: i32) -> StorageResult<Option<SlideModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Slide::find_by_id(id).one(db).await?)
    }

    /// Create a slide. A background naming an existing image is stored and
    /// marked used; anything else leaves the slide without background.
    pub async fn create<C>(
        db: &C,
        slide: NewSlide,
        background: Option<MediaRef>,
    ) -> StorageResult<SlideModel>
    where
        C: TransactionTrait,
    {
        Ok(db
            .transaction::<_, _, StorageError>(|txn| {
                Box::pin(async move {
                    let mut active: SlideActiveModel = slide.into_active_model();
                    if let Some(Some(ikey)) =
                        MediaRepository::resolve(txn, background, MediaKind::Image).await?
                    {
                        active.ikey = Set(Some(ikey));
                    }
                    Ok(active.insert(txn).await?)
                })
            })
            .await?)
    }

    /// Update a slide in place, `None` when it does not exist.
    pub async fn update<C>(
        db: &C,
        id: i32,
        mut update: UpdateSlide,
        background: Option<MediaRef>,
    ) -> StorageResult<Option<SlideModel>>
    where
        C: TransactionTrait,
    {
        Ok(db
            .transaction::<_, _, StorageError>(|txn| {
                Box::pin(async move {
                    let Some(current) = Self::get(txn, id).await? else {
                        return Ok(None);
                    };
                    update.ikey = MediaRepository::resolve(txn, background, MediaKind::Image).await?;
                    let mut active: SlideActiveModel = update.into_active_model();
                    if !active.is_changed() {
                        return Ok(Some(current));
                    }
                    active.id = Set(current.id);
                    Ok(Some(active.update(txn).await?))
                })
            })
            .await?)
    }

    /// Delete slide by ID; `true` when a row was removed.
    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let result = Slide::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}
