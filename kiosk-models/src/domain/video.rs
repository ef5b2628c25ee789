use crate::{
    constants::SINGLETON_ID,
    entities::vid::ActiveModel,
    enums::common::{AspectRatio, Toggle},
};
use kiosk_macros::IntoPartialActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use serde_aux::prelude::*;
use validator::Validate;

/// `POST /video` form. `video` names a media row of kind video.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VideoForm {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 0, message = "video must be a media id"))]
    pub video: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub ar: Option<i16>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub enable: Option<i16>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub mute: Option<i16>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub controls: Option<i16>,
}

fn toggle(code: Option<i16>, field: &str) -> Result<Option<Toggle>, String> {
    code.map(Toggle::try_from)
        .transpose()
        .map_err(|v| format!("unknown {field} code {v}"))
}

impl VideoForm {
    /// Field update plus the selected video media id, if any.
    pub fn into_parts(self) -> Result<(UpdateVideo, Option<i32>), String> {
        let ar = self
            .ar
            .map(AspectRatio::try_from)
            .transpose()
            .map_err(|v| format!("unknown aspect ratio code {v}"))?;
        let update = UpdateVideo {
            enable: toggle(self.enable, "enable")?,
            mute: toggle(self.mute, "mute")?,
            controls: toggle(self.controls, "controls")?,
            ar,
            vname: None,
            vkey: None,
        };
        Ok((update, self.video.filter(|id| *id != 0)))
    }
}

#[derive(Clone, Debug, Default, PartialEq, IntoPartialActiveModel)]
pub struct UpdateVideo {
    pub enable: Option<Toggle>,
    pub mute: Option<Toggle>,
    pub controls: Option<Toggle>,
    pub ar: Option<AspectRatio>,
    pub vname: Option<String>,
    pub vkey: Option<Option<i32>>,
}

#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewVideo {
    pub id: i32,
    pub enable: Toggle,
    pub mute: Toggle,
    pub controls: Toggle,
    pub ar: AspectRatio,
    pub vname: String,
}

impl Default for NewVideo {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            enable: Toggle::Disabled,
            mute: Toggle::Disabled,
            controls: Toggle::Enabled,
            ar: AspectRatio::Auto,
            vname: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_form() {
        let form: VideoForm =
            serde_urlencoded::from_str("video=4&ar=1&enable=1&mute=2&controls=2").unwrap();
        let (update, video) = form.into_parts().unwrap();
        assert_eq!(video, Some(4));
        assert_eq!(update.enable, Some(Toggle::Enabled));
        assert_eq!(update.mute, Some(Toggle::Disabled));
        assert_eq!(update.controls, Some(Toggle::Disabled));
        assert_eq!(update.ar, Some(AspectRatio::Auto));
    }

    #[test]
    fn test_video_form_rejects_unknown_codes() {
        let form: VideoForm = serde_urlencoded::from_str("ar=9").unwrap();
        assert!(form.into_parts().is_err());
        let form: VideoForm = serde_urlencoded::from_str("video=0").unwrap();
        assert_eq!(form.into_parts().unwrap().1, None);
    }
}
