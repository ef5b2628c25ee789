//! `SeaORM` Entity for slideshow slides.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "slides")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub hsize: String,
    pub hcolor: String,
    pub hfont: String,
    pub hbg: String,
    /// Subtitle text.
    pub subti: String,
    pub tsize: String,
    pub tcolor: String,
    pub tfont: String,
    pub tbg: String,
    /// Background image media id.
    pub ikey: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
