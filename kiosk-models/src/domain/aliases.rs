use crate::{constants::SINGLETON_ID, entities::aliases::ActiveModel};
use kiosk_macros::IntoPartialActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

/// `POST /alias` form, applied as a partial update.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate, IntoPartialActiveModel)]
pub struct UpdateAliases {
    #[validate(length(min = 1, max = 64, message = "office alias length must be 1..=64"))]
    pub office: Option<String>,
    #[validate(length(min = 1, max = 64, message = "task alias length must be 1..=64"))]
    pub task: Option<String>,
    #[validate(length(min = 1, max = 64, message = "ticket alias length must be 1..=64"))]
    pub ticket: Option<String>,
    #[validate(length(min = 1, max = 64, message = "name alias length must be 1..=64"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "number alias length must be 1..=64"))]
    pub number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewAliases {
    pub id: i32,
    pub office: String,
    pub task: String,
    pub ticket: String,
    pub name: String,
    pub number: String,
}

impl Default for NewAliases {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            office: "Office".into(),
            task: "Task".into(),
            ticket: "Ticket".into(),
            name: "Name".into(),
            number: "Number".into(),
        }
    }
}
