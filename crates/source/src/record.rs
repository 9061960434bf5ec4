//! Entries of the article registry (`articles.json`).

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use storm_types::ArticleId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: ArticleId,
    pub name: String,
    #[serde(with = "iso_date")]
    pub date: NaiveDateTime,
}

impl ArticleRecord {
    pub fn new(id: ArticleId, name: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            id,
            name: name.into(),
            date,
        }
    }

    /// A record dated now, in local time.
    pub fn now(id: ArticleId, name: impl Into<String>) -> Self {
        Self::new(id, name, Local::now().naive_local())
    }
}

/// Parses ISO-8601 timestamps as written by the registry's other writers:
/// `2024-05-01T12:30:00`, with optional fraction, `' '` separator or UTC
/// offset (the wall-clock time is kept), or a bare date.
pub fn parse_iso_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Fractional seconds are written only when present.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

mod iso_date {
    use super::{ISO_DATE_FORMAT, parse_iso_date};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(ISO_DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_iso_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid ISO-8601 date '{raw}'")))
    }
}
