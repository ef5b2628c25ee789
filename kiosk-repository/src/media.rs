use kiosk_error::StorageResult;
use kiosk_models::{
    domain::prelude::{MediaRef, NewMedia},
    entities::prelude::{Media, MediaActiveModel, MediaColumn, MediaModel},
    enums::common::MediaKind,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use tracing::warn;

pub struct MediaRepository;

impl MediaRepository {
    /// Find media by ID
    pub async fn get<C>(db: &C, id: i32) -> StorageResult<Option<MediaModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Media::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_name<C>(db: &C, name: &str) -> StorageResult<Option<MediaModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Media::find()
            .filter(MediaColumn::Name.eq(name))
            .one(db)
            .await?)
    }

    /// All media rows of `kind`, oldest first.
    pub async fn list_by_kind<C>(db: &C, kind: MediaKind) -> StorageResult<Vec<MediaModel>>
    where
        C: ConnectionTrait,
    {
        let column = match kind {
            MediaKind::Image => MediaColumn::Img,
            MediaKind::Audio => MediaColumn::Audio,
            MediaKind::Video => MediaColumn::Vid,
        };
        Ok(Media::find()
            .filter(column.eq(true))
            .order_by_asc(MediaColumn::Id)
            .all(db)
            .await?)
    }

    pub async fn create<C>(db: &C, media: NewMedia) -> StorageResult<MediaModel>
    where
        C: ConnectionTrait,
    {
        Ok(media.into_active_model().insert(db).await?)
    }

    /// Delete media by ID, returning the removed row.
    ///
    /// References held by settings or slides are left dangling.
    pub async fn delete<C>(db: &C, id: i32) -> StorageResult<Option<MediaModel>>
    where
        C: ConnectionTrait,
    {
        let Some(media) = Self::get(db, id).await? else {
            return Ok(None);
        };
        Media::delete_by_id(id).exec(db).await?;
        Ok(Some(media))
    }

    pub async fn mark_used<C>(db: &C, media: MediaModel) -> StorageResult<MediaModel>
    where
        C: ConnectionTrait,
    {
        if media.used {
            return Ok(media);
        }
        let mut active: MediaActiveModel = media.into_active_model();
        active.used = Set(true);
        Ok(active.update(db).await?)
    }

    /// Resolve a submitted media selection into a nullable column value.
    ///
    /// `Clear` resolves to `Some(None)`. A selection of an existing row of
    /// `kind` resolves to `Some(Some(id))` and marks the row used. Anything
    /// else resolves to `None`, leaving the column untouched.
    pub async fn resolve<C>(
        db: &C,
        selection: Option<MediaRef>,
        kind: MediaKind,
    ) -> StorageResult<Option<Option<i32>>>
    where
        C: ConnectionTrait,
    {
        match selection {
            None => Ok(None),
            Some(MediaRef::Clear) => Ok(Some(None)),
            Some(MediaRef::Select(id)) => match Self::get(db, id).await? {
                Some(media) if media.is(kind) => {
                    let media = Self::mark_used(db, media).await?;
                    Ok(Some(Some(media.id)))
                }
                Some(_) => {
                    warn!(media_id = id, %kind, "selected media has another kind, ignored");
                    Ok(None)
                }
                None => {
                    warn!(media_id = id, %kind, "selected media does not exist, ignored");
                    Ok(None)
                }
            },
        }
    }
}
