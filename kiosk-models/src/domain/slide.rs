use super::common::{deserialize_media_ref, MediaRef};
use crate::entities::slides::ActiveModel;
use kiosk_macros::IntoPartialActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

/// `POST /slide_a` and `POST /slide_e/{id}` form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SlideForm {
    #[serde(default, deserialize_with = "deserialize_media_ref")]
    pub background: Option<MediaRef>,
    #[validate(length(max = 300, message = "title length must be <= 300"))]
    pub title: Option<String>,
    pub hsize: Option<String>,
    pub hcolor: Option<String>,
    pub hfont: Option<String>,
    pub hbg: Option<String>,
    #[validate(length(max = 300, message = "subtitle length must be <= 300"))]
    pub subti: Option<String>,
    pub tsize: Option<String>,
    pub tcolor: Option<String>,
    pub tfont: Option<String>,
    pub tbg: Option<String>,
}

impl SlideForm {
    /// New slide with absent text fields left empty.
    pub fn into_new(self) -> (NewSlide, Option<MediaRef>) {
        let slide = NewSlide {
            title: self.title.unwrap_or_default(),
            hsize: self.hsize.unwrap_or_default(),
            hcolor: self.hcolor.unwrap_or_default(),
            hfont: self.hfont.unwrap_or_default(),
            hbg: self.hbg.unwrap_or_default(),
            subti: self.subti.unwrap_or_default(),
            tsize: self.tsize.unwrap_or_default(),
            tcolor: self.tcolor.unwrap_or_default(),
            tfont: self.tfont.unwrap_or_default(),
            tbg: self.tbg.unwrap_or_default(),
            ikey: None,
        };
        (slide, self.background)
    }

    pub fn into_update(self) -> (UpdateSlide, Option<MediaRef>) {
        let update = UpdateSlide {
            title: self.title,
            hsize: self.hsize,
            hcolor: self.hcolor,
            hfont: self.hfont,
            hbg: self.hbg,
            subti: self.subti,
            tsize: self.tsize,
            tcolor: self.tcolor,
            tfont: self.tfont,
            tbg: self.tbg,
            ikey: None,
        };
        (update, self.background)
    }
}

#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewSlide {
    pub title: String,
    pub hsize: String,
    pub hcolor: String,
    pub hfont: String,
    pub hbg: String,
    pub subti: String,
    pub tsize: String,
    pub tcolor: String,
    pub tfont: String,
    pub tbg: String,
    pub ikey: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, IntoPartialActiveModel)]
pub struct UpdateSlide {
    pub title: Option<String>,
    pub hsize: Option<String>,
    pub hcolor: Option<String>,
    pub hfont: Option<String>,
    pub hbg: Option<String>,
    pub subti: Option<String>,
    pub tsize: Option<String>,
    pub tcolor: Option<String>,
    pub tfont: Option<String>,
    pub tbg: Option<String>,
    pub ikey: Option<Option<i32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slide_defaults_to_empty_text() {
        let form: SlideForm = serde_urlencoded::from_str("title=Welcome&background=3").unwrap();
        let (slide, background) = form.into_new();
        assert_eq!(slide.title, "Welcome");
        assert_eq!(slide.subti, "");
        assert_eq!(slide.ikey, None);
        assert_eq!(background, Some(MediaRef::Select(3)));
    }

    #[test]
    fn test_update_keeps_absent_fields() {
        let form: SlideForm = serde_urlencoded::from_str("tcolor=red").unwrap();
        let (update, background) = form.into_update();
        assert_eq!(update.tcolor.as_deref(), Some("red"));
        assert_eq!(update.title, None);
        assert_eq!(background, None);
    }

    #[test]
    fn test_partial_update_clears_nullable_background() {
        use sea_orm::{ActiveValue, IntoActiveModel};

        let cleared: ActiveModel = UpdateSlide {
            ikey: Some(None),
            ..Default::default()
        }
        .into_active_model();
        assert_eq!(cleared.ikey, ActiveValue::Set(None));
        assert_eq!(cleared.title, ActiveValue::NotSet);

        let untouched: ActiveModel = UpdateSlide {
            title: Some("Hello".into()),
            ..Default::default()
        }
        .into_active_model();
        assert_eq!(untouched.ikey, ActiveValue::NotSet);
        assert_eq!(untouched.title, ActiveValue::Set("Hello".to_string()));
    }
}
