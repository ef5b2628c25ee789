//! `SeaORM` Entity for slideshow-wide settings.

use crate::enums::common::Toggle;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "slides_c")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Slideshow is shown on the display screen.
    pub status: bool,
    /// Rotation interval in milliseconds.
    pub rotation: String,
    pub navigation: Toggle,
    pub effect: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
