//! Display screen settings payloads.
//!
//! Besides styling, the display form carries one `check<lang>` checkbox per
//! supported announcement language. Those keys are collected through a
//! flattened map and folded into the comma separated `announce` column.

use super::common::{
    deserialize_checkbox, deserialize_lenient_i32, deserialize_media_ref, is_checked, MediaRef,
};
use crate::{constants::SINGLETON_ID, entities::display_store::ActiveModel};
use kiosk_macros::IntoPartialActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

/// Prefix of the per-language announcement checkboxes.
pub const ANNOUNCE_CHECK_PREFIX: &str = "check";

/// Accepted announcement repeat types.
pub const REPEAT_TYPES: &[&str] = &["each", "whole"];

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DisplayScreenForm {
    /// Template number.
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[validate(range(min = 1, max = 3, message = "display template must be 1..=3"))]
    pub display: Option<i32>,
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
    pub tsize: Option<String>,
    pub tcolor: Option<String>,
    pub tfont: Option<String>,
    pub h2size: Option<String>,
    pub h2color: Option<String>,
    pub h2font: Option<String>,
    pub ssize: Option<String>,
    pub scolor: Option<String>,
    pub sfont: Option<String>,
    pub mduration: Option<String>,
    pub rrate: Option<String>,
    pub effect: Option<String>,
    pub repeats: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[validate(range(min = 1, max = 5, message = "anr must be 1..=5"))]
    pub anr: Option<i32>,
    pub anrt: Option<String>,
    pub bgcolor: Option<String>,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub prefix: bool,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub always_show_ticket_number: bool,
    /// Remaining keys, among them the `check<lang>` checkboxes.
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

impl DisplayScreenForm {
    /// Languages out of `languages` whose checkbox was submitted checked.
    pub fn announce_languages<'a>(&self, languages: &'a [String]) -> Vec<&'a str> {
        languages
            .iter()
            .filter(|lang| {
                self.extra
                    .get(&format!("{ANNOUNCE_CHECK_PREFIX}{lang}"))
                    .is_some_and(|v| is_checked(v))
            })
            .map(String::as_str)
            .collect()
    }

    /// Field update plus the background and audio selections still to be resolved.
    pub fn into_parts(
        self,
        languages: &[String],
    ) -> (UpdateDisplayScreen, Option<MediaRef>, Option<MediaRef>) {
        let announce = self.announce_languages(languages).join(",");
        let anrt = self.anrt.filter(|t| REPEAT_TYPES.contains(&t.as_str()));
        let update = UpdateDisplayScreen {
            tmp: self.display,
            title: self.title,
            hsize: self.hsize,
            hcolor: self.hcolor,
            hfont: self.hfont,
            hbg: self.hbg,
            tsize: self.tsize,
            tcolor: self.tcolor,
            tfont: self.tfont,
            h2size: self.h2size,
            h2color: self.h2color,
            h2font: self.h2font,
            ssize: self.ssize,
            scolor: self.scolor,
            sfont: self.sfont,
            mduration: self.mduration,
            rrate: self.rrate,
            effect: self.effect,
            repeats: self.repeats,
            anr: self.anr,
            anrt,
            announce: Some(announce),
            prefix: Some(self.prefix),
            always_show_ticket_number: Some(self.always_show_ticket_number),
            bgcolor: self.bgcolor,
            ikey: None,
            akey: None,
        };
        (update, self.background, self.naudio)
    }
}

#[derive(Clone, Debug, Default, PartialEq, IntoPartialActiveModel)]
pub struct UpdateDisplayScreen {
    pub tmp: Option<i32>,
    pub title: Option<String>,
    pub hsize: Option<String>,
    pub hcolor: Option<String>,
    pub hfont: Option<String>,
    pub hbg: Option<String>,
    pub tsize: Option<String>,
    pub tcolor: Option<String>,
    pub tfont: Option<String>,
    pub h2size: Option<String>,
    pub h2color: Option<String>,
    pub h2font: Option<String>,
    pub ssize: Option<String>,
    pub scolor: Option<String>,
    pub sfont: Option<String>,
    pub mduration: Option<String>,
    pub rrate: Option<String>,
    pub effect: Option<String>,
    pub repeats: Option<String>,
    pub anr: Option<i32>,
    pub anrt: Option<String>,
    pub announce: Option<String>,
    pub prefix: Option<bool>,
    pub always_show_ticket_number: Option<bool>,
    pub bgcolor: Option<String>,
    pub ikey: Option<Option<i32>>,
    pub akey: Option<Option<i32>>,
}

#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewDisplayScreen {
    pub id: i32,
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
    pub rrate: String,
    pub effect: String,
    pub repeats: String,
    pub anr: i32,
    pub anrt: String,
    pub announce: String,
    pub prefix: bool,
    pub always_show_ticket_number: bool,
    pub bgcolor: String,
}

impl Default for NewDisplayScreen {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            tmp: 1,
            title: "Queue Management".into(),
            hsize: "500%".into(),
            hcolor: "rgb(129, 200, 139)".into(),
            hfont: "Amiri".into(),
            hbg: "rgba(0, 0, 0, 0.5)".into(),
            tsize: "400%".into(),
            tcolor: "rgb(184, 50, 50)".into(),
            tfont: "Mada".into(),
            h2size: "600%".into(),
            h2color: "rgb(184, 50, 50)".into(),
            h2font: "Amiri".into(),
            ssize: "400%".into(),
            scolor: "rgb(129, 200, 139)".into(),
            sfont: "Mada".into(),
            mduration: "3000".into(),
            rrate: "2000".into(),
            effect: "fade".into(),
            repeats: "3".into(),
            anr: 2,
            anrt: "each".into(),
            announce: "en-us".into(),
            prefix: false,
            always_show_ticket_number: false,
            bgcolor: "bg-danger".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages() -> Vec<String> {
        vec!["en-us".into(), "fr".into(), "ar".into()]
    }

    #[test]
    fn test_checked_languages_build_announce() {
        let form: DisplayScreenForm =
            serde_urlencoded::from_str("checken-us=on&checkar=true&checkxx=on&display=1&anr=3")
                .unwrap();
        let (update, _, _) = form.into_parts(&languages());
        assert_eq!(update.announce.as_deref(), Some("en-us,ar"));
        assert_eq!(update.tmp, Some(1));
        assert_eq!(update.anr, Some(3));
    }

    #[test]
    fn test_absent_checkboxes_are_false() {
        let form: DisplayScreenForm = serde_urlencoded::from_str("title=Hello").unwrap();
        let (update, background, _) = form.into_parts(&languages());
        assert_eq!(update.announce.as_deref(), Some(""));
        assert_eq!(update.prefix, Some(false));
        assert_eq!(update.always_show_ticket_number, Some(false));
        assert_eq!(update.title.as_deref(), Some("Hello"));
        assert_eq!(background, None);
    }

    #[test]
    fn test_flags_and_repeat_type() {
        let form: DisplayScreenForm =
            serde_urlencoded::from_str("prefix=True&always_show_ticket_number=True&anrt=bogus")
                .unwrap();
        let (update, _, _) = form.into_parts(&languages());
        assert_eq!(update.prefix, Some(true));
        assert_eq!(update.always_show_ticket_number, Some(true));
        assert_eq!(update.anrt, None);
    }
}
