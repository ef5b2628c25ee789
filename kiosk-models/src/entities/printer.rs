//! `SeaORM` Entity for the ticket printer settings table.
//!
//! Single row (id = 1) created lazily on first read.

use crate::enums::common::TicketKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "printer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// How tickets are handed out: registered on screen or printed.
    pub value: TicketKind,
    /// Whether a USB printer is currently in use.
    pub active: bool,
    pub vendor: i32,
    pub product: i32,
    pub in_ep: i32,
    pub out_ep: i32,
    /// Language used on printed tickets.
    pub langu: String,
    pub scale: i32,
    pub header: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
