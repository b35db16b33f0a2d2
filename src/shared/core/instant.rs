// ISO-8601 instant parsing shared by the status engine and the row mapper.
//
// Purpose
// - One parsing path for every date-like field, so status computation and storage
//   normalisation can never disagree about what a timestamp means.
//
// Notes
// - Inputs without an offset are read as UTC.
// - Instants are compared on epoch milliseconds, so parsing truncates to millisecond precision.
// - Unparsable input is absent, never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(truncate_millis(parsed.with_timezone(&Utc)));
    }

    // SQL-style offsets such as `2024-06-01 00:00:00+00`
    if let Ok(parsed) = DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(truncate_millis(parsed.with_timezone(&Utc)));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(truncate_millis(naive.and_utc()));
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn parse_optional_instant(input: Option<&str>) -> Option<DateTime<Utc>> {
    input.and_then(parse_instant)
}

/// Renders the canonical storage form, e.g. `2024-01-15T10:30:00.000Z`.
pub fn to_iso_string(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn normalize_iso(input: Option<&str>) -> Option<String> {
    parse_optional_instant(input).map(to_iso_string)
}

pub fn truncate_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(instant.timestamp_millis()).unwrap_or(instant)
}

/// Serde adapter for optional instants at input boundaries. Anything `parse_instant`
/// rejects, including non-string values, deserializes to `None`.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(raw)) => parse_instant(&raw),
        _ => None,
    })
}

/// Current wall-clock time at the precision instants are stored with.
pub fn now_millis() -> DateTime<Utc> {
    truncate_millis(Utc::now())
}
