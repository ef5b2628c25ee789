//! `SeaORM` Entity for the customer-facing display screen settings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "display_store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Selected layout template.
    pub tmp: i32,
    pub title: String,
    pub hsize: String,
    pub hcolor: String,
    pub hfont: String,
    pub hbg: String,
    pub tsize: String,
    pub tcolor: String,
    pub tfont: String,
    pub h2size: String,
    pub h2color: String,
    pub h2font: String,
    pub ssize: String,
    pub scolor: String,
    pub sfont: String,
    pub mduration: String,
    /// Page refresh rate in milliseconds.
    pub rrate: String,
    pub effect: String,
    pub repeats: String,
    /// Announcement repeat count.
    pub anr: i32,
    /// Announcement repeat type (`each` or `whole`).
    pub anrt: String,
    /// Comma separated announcement languages, empty when announcements are off.
    pub announce: String,
    pub prefix: bool,
    pub always_show_ticket_number: bool,
    pub bgcolor: String,
    pub ikey: Option<i32>,
    pub akey: Option<i32>,
}

impl Model {
    /// Announcement languages currently enabled.
    pub fn announce_languages(&self) -> Vec<&str> {
        self.announce
            .split(',')
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .collect()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
