use kiosk_macros::IntoActiveValue;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt::{Display, Formatter};

/// Two-state switch used by the video player and slideshow forms.
///
/// Stored with the same codes the admin forms submit (1 / 2).
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize_repr,
    Deserialize_repr,
    IntoActiveValue,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[repr(i16)]
pub enum Toggle {
    Enabled = 1,
    Disabled = 2,
}

impl Toggle {
    #[inline]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Toggle::Enabled)
    }
}

impl From<bool> for Toggle {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Toggle::Enabled
        } else {
            Toggle::Disabled
        }
    }
}

impl TryFrom<i16> for Toggle {
    type Error = i16;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Toggle::Enabled),
            2 => Ok(Toggle::Disabled),
            other => Err(other),
        }
    }
}

/// Video aspect ratio handling.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize_repr,
    Deserialize_repr,
    IntoActiveValue,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[repr(i16)]
pub enum AspectRatio {
    /// Keep the video's own ratio.
    Auto = 1,
    Widescreen = 2,
    Standard = 3,
}

impl AspectRatio {
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Auto => "auto",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Standard => "4:3",
        }
    }
}

impl TryFrom<i16> for AspectRatio {
    type Error = i16;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AspectRatio::Auto),
            2 => Ok(AspectRatio::Widescreen),
            3 => Ok(AspectRatio::Standard),
            other => Err(other),
        }
    }
}

/// How the touch screen hands out tickets.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize_repr,
    Deserialize_repr,
    IntoActiveValue,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[repr(i16)]
pub enum TicketKind {
    /// Ticket number is shown on screen, no printer involved.
    Registered = 1,
    /// Ticket is printed on a USB printer.
    Printed = 2,
}

impl TryFrom<i16> for TicketKind {
    type Error = i16;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TicketKind::Registered),
            2 => Ok(TicketKind::Printed),
            other => Err(other),
        }
    }
}

/// Kind of an uploaded media file.
///
/// The numeric code is the `<kind>` segment of the multimedia routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogv", "mkv"];

impl MediaKind {
    #[inline]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(MediaKind::Image),
            2 => Some(MediaKind::Audio),
            3 => Some(MediaKind::Video),
            _ => None,
        }
    }

    #[inline]
    pub fn code(&self) -> i32 {
        match self {
            MediaKind::Image => 1,
            MediaKind::Audio => 2,
            MediaKind::Video => 3,
        }
    }

    /// Lowercase file extensions accepted for this kind.
    #[inline]
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_EXTENSIONS,
            MediaKind::Audio => AUDIO_EXTENSIONS,
            MediaKind::Video => VIDEO_EXTENSIONS,
        }
    }

    /// Whether `file_name` carries one of the allowed extensions (case-insensitive).
    pub fn accepts(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .map(|(stem, ext)| {
                !stem.is_empty() && self.extensions().contains(&ext.to_ascii_lowercase().as_str())
            })
            .unwrap_or(false)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Audio => "Audio",
            MediaKind::Video => "Video",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
