//! `SeaORM` Entity for video player settings.

use crate::enums::common::{AspectRatio, Toggle};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vid")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub enable: Toggle,
    pub mute: Toggle,
    pub controls: Toggle,
    pub ar: AspectRatio,
    /// File name of the selected video.
    pub vname: String,
    /// Media id of the selected video.
    pub vkey: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
