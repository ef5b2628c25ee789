use serde::{de, Deserialize, Deserializer};
use std::fmt;

/// Path parameter carrying a numeric row id, e.g. `/slide_r/{id}`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PathId {
    pub id: i32,
}

/// Path parameter for the multimedia routes.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PathKind {
    pub kind: i32,
}

/// Reference to a media row as submitted by a `<select>` field.
///
/// `0` (or an empty value) clears the reference, any other id selects a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaRef {
    Clear,
    Select(i32),
}

impl MediaRef {
    #[inline]
    pub fn from_value(value: i32) -> Self {
        if value == 0 {
            MediaRef::Clear
        } else {
            MediaRef::Select(value)
        }
    }
}

/// Decode an optional media reference from a form value.
///
/// Absent keeps the current reference; a value that is not a number is treated as absent.
pub fn deserialize_media_ref<'de, D>(deserializer: D) -> Result<Option<MediaRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| {
        let v = v.trim();
        if v.is_empty() {
            Some(MediaRef::Clear)
        } else {
            v.parse::<i32>().ok().map(MediaRef::from_value)
        }
    }))
}

/// Checkbox decoding: a present key is `true` unless its value is an explicit "off".
///
/// Combine with `#[serde(default)]` so an absent key decodes to `false`.
pub fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct CheckboxVisitor;

    impl de::Visitor<'_> for CheckboxVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a checkbox value")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            Ok(is_checked(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }
    }

    deserializer.deserialize_any(CheckboxVisitor)
}

/// Interpretation of a raw checkbox value.
#[inline]
pub fn is_checked(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "off" | "n" | "no"
    )
}

/// Optional integer submitted as text; blank and garbage both decode to `None`.
pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.trim().parse::<i32>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_checkbox")]
        flag: bool,
        #[serde(default, deserialize_with = "deserialize_media_ref")]
        background: Option<MediaRef>,
        #[serde(default, deserialize_with = "deserialize_lenient_i32")]
        count: Option<i32>,
    }

    fn probe(query: &str) -> Probe {
        serde_urlencoded::from_str(query).expect("decode")
    }

    #[test]
    fn test_checkbox_presence() {
        assert!(!probe("").flag);
        assert!(probe("flag=on").flag);
        assert!(probe("flag=True").flag);
        assert!(probe("flag=1").flag);
        assert!(!probe("flag=false").flag);
        assert!(!probe("flag=0").flag);
    }

    #[test]
    fn test_media_ref() {
        assert_eq!(probe("").background, None);
        assert_eq!(probe("background=0").background, Some(MediaRef::Clear));
        assert_eq!(probe("background=").background, Some(MediaRef::Clear));
        assert_eq!(probe("background=7").background, Some(MediaRef::Select(7)));
        assert_eq!(probe("background=abc").background, None);
    }

    #[test]
    fn test_lenient_number() {
        assert_eq!(probe("count=3").count, Some(3));
        assert_eq!(probe("count=three").count, None);
        assert_eq!(probe("").count, None);
    }
}
