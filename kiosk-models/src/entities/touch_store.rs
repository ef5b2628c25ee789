//! `SeaORM` Entity for the touch screen (ticket issuing terminal) settings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "touch_store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Selected layout template.
    pub tmp: i32,
    /// Tickets are registered on screen instead of printed.
    pub n: bool,
    pub title: String,
    pub hsize: String,
    pub hcolor: String,
    pub hfont: String,
    pub hbg: String,
    pub mbg: String,
    pub tsize: String,
    pub tcolor: String,
    pub tfont: String,
    pub msize: String,
    pub mcolor: String,
    pub mfont: String,
    pub mduration: String,
    pub message: String,
    /// Background image media id.
    pub ikey: Option<i32>,
    /// Notification audio media id.
    pub akey: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
