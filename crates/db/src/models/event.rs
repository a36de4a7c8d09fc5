//! Event content model.

use ama_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use super::datetime;

/// A document from the `event` collection.
///
/// Timestamps may be stored either as BSON datetimes or as ISO-8601 strings;
/// both deserialize to a structured UTC [`Timestamp`] and serialize back to
/// clients as RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Soft reference to `Program.slug`; not checked against the `program`
    /// collection.
    pub program_slug: String,
    pub title: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub starts_at: Timestamp,
    #[serde(default, deserialize_with = "datetime::option::deserialize")]
    pub ends_at: Option<Timestamp>,
    #[serde(default)]
    pub capacity: Option<i64>,
    /// Price in Hungarian forint.
    #[serde(default)]
    pub price_huf: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mongodb::bson::{doc, from_document, DateTime as BsonDateTime};

    #[test]
    fn string_and_bson_timestamps_deserialize_to_the_same_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();

        let from_string: Event = from_document(doc! {
            "program_slug": "foundations",
            "title": "Spring weekend",
            "starts_at": "2025-06-01T09:00:00Z",
        })
        .unwrap();

        let from_datetime: Event = from_document(doc! {
            "program_slug": "foundations",
            "title": "Spring weekend",
            "starts_at": BsonDateTime::from_millis(instant.timestamp_millis()),
        })
        .unwrap();

        assert_eq!(from_string.starts_at, instant);
        assert_eq!(from_datetime.starts_at, instant);
    }

    #[test]
    fn ends_at_defaults_to_none() {
        let event: Event = from_document(doc! {
            "program_slug": "foundations",
            "title": "Evening talk",
            "starts_at": "2025-06-01T18:00:00",
        })
        .unwrap();
        assert!(event.ends_at.is_none());
        assert!(event.capacity.is_none());
    }

    #[test]
    fn null_ends_at_is_none() {
        let event: Event = from_document(doc! {
            "program_slug": "foundations",
            "title": "Evening talk",
            "starts_at": "2025-06-01T18:00:00",
            "ends_at": null,
        })
        .unwrap();
        assert!(event.ends_at.is_none());
    }

    #[test]
    fn unparsable_starts_at_fails_validation() {
        let result = from_document::<Event>(doc! {
            "program_slug": "foundations",
            "title": "Evening talk",
            "starts_at": "sometime soon",
        });
        assert!(result.is_err());
    }

    #[test]
    fn missing_starts_at_fails_validation() {
        let result = from_document::<Event>(doc! {
            "program_slug": "foundations",
            "title": "Evening talk",
        });
        assert!(result.is_err());
    }

    #[test]
    fn serializes_timestamp_as_rfc3339() {
        let event: Event = from_document(doc! {
            "program_slug": "foundations",
            "title": "Evening talk",
            "starts_at": "2025-06-01T18:00:00Z",
        })
        .unwrap();

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["starts_at"], "2025-06-01T18:00:00Z");
    }
}
