use super::common::{deserialize_lenient_i32, deserialize_media_ref, MediaRef};
use crate::{constants::SINGLETON_ID, entities::touch_store::ActiveModel};
use kiosk_macros::IntoPartialActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

/// `POST /touchscreen_c/{id}` form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TouchScreenForm {
    /// Template number.
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[validate(range(min = 1, max = 3, message = "touch template must be 1..=3"))]
    pub touch: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_media_ref")]
    pub background: Option<MediaRef>,
    #[serde(default, deserialize_with = "deserialize_media_ref")]
    pub naudio: Option<MediaRef>,
    #[validate(length(max = 300, message = "title length must be <= 300"))]
    pub title: Option<String>,
    pub hsize: Option<String>,
    pub hcolor: Option<String>,
    pub hfont: Option<String>,
    pub hbg: Option<String>,
    pub mbg: Option<String>,
    pub tsize: Option<String>,
    pub tcolor: Option<String>,
    pub tfont: Option<String>,
    pub msize: Option<String>,
    pub mcolor: Option<String>,
    pub mfont: Option<String>,
    pub mduration: Option<String>,
    #[validate(length(max = 300, message = "message length must be <= 300"))]
    pub message: Option<String>,
}

impl TouchScreenForm {
    /// Field update plus the background and audio selections still to be resolved.
    pub fn into_parts(self) -> (UpdateTouchScreen, Option<MediaRef>, Option<MediaRef>) {
        let update = UpdateTouchScreen {
            tmp: self.touch,
            title: self.title,
            hsize: self.hsize,
            hcolor: self.hcolor,
            hfont: self.hfont,
            hbg: self.hbg,
            mbg: self.mbg,
            tsize: self.tsize,
            tcolor: self.tcolor,
            tfont: self.tfont,
            msize: self.msize,
            mcolor: self.mcolor,
            mfont: self.mfont,
            mduration: self.mduration,
            message: self.message,
            ikey: None,
            akey: None,
        };
        (update, self.background, self.naudio)
    }
}

#[derive(Clone, Debug, Default, PartialEq, IntoPartialActiveModel)]
pub struct UpdateTouchScreen {
    pub tmp: Option<i32>,
    pub title: Option<String>,
    pub hsize: Option<String>,
    pub hcolor: Option<String>,
    pub hfont: Option<String>,
    pub hbg: Option<String>,
    pub mbg: Option<String>,
    pub tsize: Option<String>,
    pub tcolor: Option<String>,
    pub tfont: Option<String>,
    pub msize: Option<String>,
    pub mcolor: Option<String>,
    pub mfont: Option<String>,
    pub mduration: Option<String>,
    pub message: Option<String>,
    pub ikey: Option<Option<i32>>,
    pub akey: Option<Option<i32>>,
}

#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewTouchScreen {
    pub id: i32,
    pub tmp: i32,
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
}

impl Default for NewTouchScreen {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            tmp: 1,
            n: true,
            title: "Please select a task to pull a ticket for".into(),
            hsize: "500%".into(),
            hcolor: "rgb(129, 200, 139)".into(),
            hfont: "Amiri".into(),
            hbg: "rgba(0, 0, 0, 0.5)".into(),
            mbg: "rgba(0, 0, 0, 0.5)".into(),
            tsize: "200%".into(),
            tcolor: "btn-danger".into(),
            tfont: "Mada".into(),
            msize: "400%".into(),
            mcolor: "rgb(255, 255, 0)".into(),
            mfont: "Mada".into(),
            mduration: "3000".into(),
            message: "Ticket has been issued, pull your ticket".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_form_parts() {
        let form: TouchScreenForm =
            serde_urlencoded::from_str("touch=2&background=0&naudio=0&title=Welcome&hsize=300%25")
                .unwrap();
        let (update, background, audio) = form.into_parts();
        assert_eq!(update.tmp, Some(2));
        assert_eq!(update.title.as_deref(), Some("Welcome"));
        assert_eq!(update.hsize.as_deref(), Some("300%"));
        assert_eq!(update.message, None);
        assert_eq!(background, Some(MediaRef::Clear));
        assert_eq!(audio, Some(MediaRef::Clear));
    }
}
