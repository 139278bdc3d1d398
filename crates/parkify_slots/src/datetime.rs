//! Local date-time values as typed into a `datetime-local` input.
//!
//! On the wire a timestamp is `YYYY-MM-DDTHH:MM` (seconds optional) or the
//! empty string when the field was never filled in.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};
use tracing::warn;

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const SECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a local timestamp. Blank or malformed input yields `None`.
pub fn parse_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(value, MINUTE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, SECOND_FORMAT))
        .or_else(|_| value.parse::<NaiveDateTime>())
        .ok()
}

/// Formats a local timestamp, dropping the seconds when they are zero.
pub fn format_local(value: &NaiveDateTime) -> String {
    if value.second() == 0 && value.nanosecond() == 0 {
        value.format(MINUTE_FORMAT).to_string()
    } else {
        value.format(SECOND_FORMAT).to_string()
    }
}

pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&format_local(dt)),
        None => serializer.serialize_str(""),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(s) if s.trim().is_empty() => None,
        Some(s) => {
            let parsed = parse_local(&s);
            if parsed.is_none() {
                warn!("Ignoring unparseable timestamp {:?}", s);
            }
            parsed
        }
    })
}
