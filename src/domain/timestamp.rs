//! Timestamps and their on-disk formats
//!
//! Records carry `NaiveDateTime` values in local time. Formatting only happens
//! at the serde boundary: message, mood and journal timestamps use ISO-8601
//! (`2025-01-17T09:30:00.123456`), session dates use `YYYY-MM-DD HH:MM:SS`.

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Storage format of a session's creation date
pub const SESSION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, truncated to microseconds like the stored files.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    let micros = now.nanosecond() / 1_000;
    now.with_nanosecond(micros * 1_000).unwrap_or(now)
}

/// The instant `days` days before `now`, saturating at the earliest
/// representable instant.
pub fn days_before(now: NaiveDateTime, days: u32) -> NaiveDateTime {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Outcome of reading a stored date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCheck {
    Ok(NaiveDateTime),
    Skipped(String),
}

/// A session creation date as it appears on disk.
///
/// Values that don't parse are kept verbatim so one bad record neither
/// poisons the whole resource on load nor gets rewritten on flush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionDate {
    Parsed(NaiveDateTime),
    Malformed(String),
}

impl SessionDate {
    /// Build a date from an instant; sub-second precision is dropped.
    pub fn from_datetime(value: NaiveDateTime) -> Self {
        SessionDate::Parsed(value.with_nanosecond(0).unwrap_or(value))
    }

    /// Parse the stored string form
    pub fn parse(raw: &str) -> Self {
        match NaiveDateTime::parse_from_str(raw, SESSION_DATE_FORMAT) {
            Ok(value) => SessionDate::Parsed(value),
            Err(_) => SessionDate::Malformed(raw.to_string()),
        }
    }

    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            SessionDate::Parsed(value) => Some(*value),
            SessionDate::Malformed(_) => None,
        }
    }

    pub fn check(&self) -> DateCheck {
        match self {
            SessionDate::Parsed(value) => DateCheck::Ok(*value),
            SessionDate::Malformed(raw) => DateCheck::Skipped(format!(
                "date '{}' does not match {}",
                raw, SESSION_DATE_FORMAT
            )),
        }
    }
}

impl fmt::Display for SessionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionDate::Parsed(value) => write!(f, "{}", value.format(SESSION_DATE_FORMAT)),
            SessionDate::Malformed(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for SessionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SessionDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SessionDate::parse(&raw))
    }
}
