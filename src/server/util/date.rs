//! Coercion of free-form client values into UTC timestamps.
//!
//! Three strategies are tried in order and the first success wins:
//!
//! 1. Direct construction: an RFC 3339 string, or a JSON number taken as epoch milliseconds.
//! 2. Generic date-string parsing: calendar dates, naive date-times and RFC 2822.
//! 3. Numeric-epoch interpretation of a string, in milliseconds.
//!
//! Naive inputs without an offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Coerces a value that must produce a date, falling back to the current time.
pub fn required_date(value: Option<&Value>) -> DateTime<Utc> {
    value.and_then(parse_date).unwrap_or_else(Utc::now)
}

/// Coerces a value that may be absent. Unparsable input yields `None`.
pub fn optional_date(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value.and_then(parse_date)
}

/// Attempts every strategy against a single JSON value.
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(number) => number.as_f64().and_then(from_epoch_millis),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }

            construct(text)
                .or_else(|| parse_generic(text))
                .or_else(|| parse_epoch(text))
        }
        _ => None,
    }
}

fn construct(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

fn parse_generic(text: &str) -> Option<DateTime<Utc>> {
    if let Some(date) = NAIVE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    if let Some(naive) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(naive.and_utc());
    }

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

fn parse_epoch(text: &str) -> Option<DateTime<Utc>> {
    text.parse::<f64>().ok().and_then(from_epoch_millis)
}

fn from_epoch_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }

    DateTime::from_timestamp_millis(millis.trunc() as i64)
}
