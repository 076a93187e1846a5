//! Lenient timestamp (de)serialization.
//!
//! The backend emits RFC 3339 from some routes and SQLite's
//! `YYYY-MM-DD HH:MM:SS` (no zone, UTC) from others. Both parse; output is
//! always RFC 3339.
//!
//! ```ignore
//! #[serde(with = "crate::models::timestamp")]
//! pub created_at: DateTime<Utc>,
//! ```

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses any timestamp form the backend is known to send.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("unrecognised timestamp '{}'", raw)))
}

/// The same, for `Option<DateTime<Utc>>` fields. Use with `#[serde(default)]`.
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("unrecognised timestamp '{}'", raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parses_rfc3339_with_offset() {
        let parsed = parse("2025-03-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn test_parses_sqlite_form_as_utc() {
        let parsed = parse("2025-03-01 08:15:30").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-03-01T08:15:30+00:00");
    }

    #[test]
    fn test_parses_naive_iso_with_fraction() {
        let parsed = parse("2025-03-01T08:15:30.123456").unwrap();
        assert_eq!(parsed.minute(), 15);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse("yesterday").is_none());
    }
}
