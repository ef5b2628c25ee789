//! `SeaORM` Entity for uploaded media files.

use crate::enums::common::MediaKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stored file name, unique within the upload directory.
    #[sea_orm(unique)]
    pub name: String,
    pub img: bool,
    pub audio: bool,
    pub vid: bool,
    /// Referenced by a slide or a settings row at least once.
    pub used: bool,
}

impl Model {
    /// Kind of the media, derived from its type flags.
    pub fn kind(&self) -> Option<MediaKind> {
        if self.img {
            Some(MediaKind::Image)
        } else if self.audio {
            Some(MediaKind::Audio)
        } else if self.vid {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    #[inline]
    pub fn is(&self, kind: MediaKind) -> bool {
        match kind {
            MediaKind::Image => self.img,
            MediaKind::Audio => self.audio,
            MediaKind::Video => self.vid,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
