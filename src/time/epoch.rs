use crate::time::error::Error;
use crate::time::Instant;
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use lazy_static::*;
use regex::Regex;

lazy_static! {
    static ref LEADING_INTEGER_REGEX: Regex =
        Regex::new(r"^\s*(?P<value>[+-]?\d+)").expect("Regex compilation error");
    static ref EPOCH_MILLIS_REGEX: Regex =
        Regex::new(r"^[+-]?\d+$").expect("Regex compilation error");
}

/// Widest distance from the epoch, in milliseconds, a timeline instant may have.
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// Reads the leading integer of `value` as milliseconds since the Unix epoch.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so `"1000ms"` is the same instant as `"1000"`. Text without a
/// leading integer, or an integer outside of the timeline range, yields
/// `None`: the invalid instant, which never compares true against anything.
pub fn parse_epoch_millis(value: &str) -> Option<Instant> {
    let caps = LEADING_INTEGER_REGEX.captures(value)?;
    let millis = caps.name("value")?.as_str().parse::<i64>().ok()?;
    from_epoch_millis(millis)
}

pub fn from_epoch_millis(millis: i64) -> Option<Instant> {
    if !(-MAX_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&millis) {
        return None;
    }
    Utc.timestamp_millis_opt(millis).single()
}

/// Parses user supplied time: epoch milliseconds, a calendar date taken as
/// UTC midnight, or an RFC 3339 timestamp with any offset.
pub fn parse_instant(value: &str) -> Result<Instant, Error> {
    let value = value.trim();
    if EPOCH_MILLIS_REGEX.is_match(value) {
        return value
            .parse::<i64>()
            .ok()
            .and_then(from_epoch_millis)
            .ok_or_else(|| Error::OutOfRange(value.to_owned()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight))
            .ok_or_else(|| Error::OutOfRange(value.to_owned()));
    }
    let parsed =
        DateTime::parse_from_rfc3339(value).map_err(|_| Error::Syntax(value.to_owned()))?;
    // Timeline instants have millisecond resolution; finer fractions are dropped.
    from_epoch_millis(parsed.timestamp_millis()).ok_or_else(|| Error::OutOfRange(value.to_owned()))
}

/// ISO-8601 rendering with millisecond precision and a `Z` suffix.
pub fn format_instant(instant: &Instant) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
