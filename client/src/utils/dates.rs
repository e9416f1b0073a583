//! Calendar-day parsing for the mixed date formats the backend emits.
//!
//! Leave and OD endpoints return dates either as bare `YYYY-MM-DD` strings or
//! as full ISO timestamps, depending on which service wrote the record. A
//! timestamp must never shift the calendar day it names, so parsing always
//! keeps the date portion and discards the time and offset.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parses a calendar day from a bare date or an ISO timestamp.
///
/// When a `T` separator is present only the portion before it is read, which
/// keeps `2024-03-10T18:30:00Z` on March 10 regardless of offset. Input that
/// matches neither form falls back to datetime parsing truncated to its date.
pub fn parse_date_only(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_part = match trimmed.split_once('T') {
        Some((date, _)) => date,
        None => trimmed,
    };
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return Some(date);
    }

    // Some legacy exports use a space separator instead of `T`.
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.date());
    }

    None
}

/// Canonical zero-padded `YYYY-MM-DD` form, used as the dedup key and on the
/// wire.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Serde adapter for required date fields that may arrive as timestamps.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_only(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date: {}", raw)))
}

/// Serde adapter for optional date fields. Unparseable values collapse to
/// `None` rather than failing the whole record.
pub fn lenient_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date_only))
}
