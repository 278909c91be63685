use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

/// Attributes decoded from a post's metadata block. Keys are accepted either
/// capitalised (`Title`) or all lowercase (`title`); anything unrecognised is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrontMatter {
    #[serde(default, alias = "title")]
    pub title: String,
    #[serde(default, alias = "subtitle")]
    pub subtitle: String,
    #[serde(default, alias = "author")]
    pub author: String,
    #[serde(alias = "created", deserialize_with = "timestamp")]
    pub created: DateTime<FixedOffset>,
    #[serde(default, alias = "edited", deserialize_with = "optional_timestamp")]
    pub edited: Option<DateTime<FixedOffset>>,
    #[serde(default, alias = "tags")]
    pub tags: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
#[error("unable to decode front matter: {0}")]
pub struct DecodeError(#[from] serde_yaml::Error);

impl FrontMatter {
    pub fn decode(metadata: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_yaml::from_slice(metadata)?)
    }
}

/// Timestamps keep the offset they were written with, so the calendar day a
/// post belongs to is the author's. Values without an offset are UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive).into());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).into())
}

fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid timestamp `{raw}`")))
}

fn optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp `{raw}`"))),
    }
}
