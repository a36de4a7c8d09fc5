//! Serde helpers for timestamp fields stored either as BSON datetimes or as
//! ISO-8601 strings.
//!
//! Content is authored out-of-band, so `starts_at`/`ends_at` may arrive as a
//! proper BSON datetime or as a string. Both deserialize to the same
//! structured UTC timestamp; anything else is a validation failure.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Bson::deserialize(deserializer)?;
    from_bson(&raw).map_err(serde::de::Error::custom)
}

/// Variant for `Option<DateTime<Utc>>` fields. Combine with
/// `#[serde(default)]` so a missing key also maps to `None`.
pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Bson>::deserialize(deserializer)? {
            None | Some(Bson::Null) => Ok(None),
            Some(raw) => from_bson(&raw).map(Some).map_err(serde::de::Error::custom),
        }
    }
}

fn from_bson(value: &Bson) -> Result<DateTime<Utc>, String> {
    match value {
        Bson::DateTime(dt) => DateTime::from_timestamp_millis(dt.timestamp_millis())
            .ok_or_else(|| format!("timestamp out of range: {}ms", dt.timestamp_millis())),
        Bson::String(text) => parse_iso(text),
        other => Err(format!(
            "expected a datetime or an ISO-8601 string, got {other}"
        )),
    }
}

/// Parse an ISO-8601 timestamp. Accepts a full RFC 3339 form with offset, a
/// naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` form (treated as UTC), or a bare
/// date (treated as midnight UTC).
fn parse_iso(text: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(format!("`{text}` is not a recognized ISO-8601 timestamp"))
}
