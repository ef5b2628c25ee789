//! Uploaded media payloads.

use crate::{entities::media::ActiveModel, enums::common::MediaKind};
use sea_orm::DeriveIntoActiveModel;

#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewMedia {
    pub name: String,
    pub img: bool,
    pub audio: bool,
    pub vid: bool,
    pub used: bool,
}

impl NewMedia {
    pub fn new(name: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            name: name.into(),
            img: kind == MediaKind::Image,
            audio: kind == MediaKind::Audio,
            vid: kind == MediaKind::Video,
            used: false,
        }
    }
}

/// File name safe to store in the upload directory.
///
/// Directory components are dropped and characters outside `[A-Za-z0-9._-]`
/// in the stem become `_`. The extension is kept lowercase. Returns `None`
/// when nothing usable is left.
pub fn sanitize_file_name(input: &str) -> Option<String> {
    let base = input.rsplit(['/', '\\']).next().unwrap_or(input).trim();
    let (stem, ext) = base.rsplit_once('.')?;
    let stem = stem
        .chars()
        .map(|c| match c {
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' => c,
            _ => '_',
        })
        .collect::<String>();
    let stem = stem.trim_matches(|c| c == '.' || c == '_');
    let ext = ext.to_ascii_lowercase();
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(format!("{stem}.{ext}"))
}
