use crate::{
    constants::SINGLETON_ID,
    entities::slides_c::ActiveModel,
    enums::common::Toggle,
};
use kiosk_macros::IntoPartialActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use serde_aux::prelude::*;
use validator::Validate;

/// `POST /slide_c` form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SlideshowForm {
    /// Rotation interval in milliseconds.
    #[validate(length(min = 1, max = 10, message = "rotation length must be 1..=10"))]
    pub rotation: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub navigation: Option<i16>,
    #[validate(length(min = 1, max = 32, message = "effect length must be 1..=32"))]
    pub effect: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub status: Option<i16>,
}

impl SlideshowForm {
    pub fn into_update(self) -> Result<UpdateSlideshow, String> {
        let navigation = self
            .navigation
            .map(Toggle::try_from)
            .transpose()
            .map_err(|v| format!("unknown navigation code {v}"))?;
        let status = self
            .status
            .map(Toggle::try_from)
            .transpose()
            .map_err(|v| format!("unknown status code {v}"))?
            .map(|t| t.is_enabled());
        Ok(UpdateSlideshow {
            status,
            rotation: self.rotation,
            navigation,
            effect: self.effect,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, IntoPartialActiveModel)]
pub struct UpdateSlideshow {
    pub status: Option<bool>,
    pub rotation: Option<String>,
    pub navigation: Option<Toggle>,
    pub effect: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewSlideshow {
    pub id: i32,
    pub status: bool,
    pub rotation: String,
    pub navigation: Toggle,
    pub effect: String,
}

impl Default for NewSlideshow {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            status: false,
            rotation: "3000".into(),
            navigation: Toggle::Enabled,
            effect: "fade".into(),
        }
    }
}
