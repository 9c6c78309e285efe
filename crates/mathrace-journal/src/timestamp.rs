//! Timestamp codec.
//!
//! Event lines are prefixed either by the number of seconds elapsed since
//! the race start (up to r20642) or by an `hh:mm:ss.fff` clock reading
//! (from r20644 on). Sub-second digits are truncated on decode.

use crate::errors::JournalError;
use crate::version::JournalVersion;
use chrono::{DateTime, FixedOffset, TimeDelta};
use regex::Regex;
use std::sync::OnceLock;

/// On-wire timestamp encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Integer seconds since the race start.
    Seconds,
    /// Zero-padded `hh:mm:ss.fff`.
    Clock,
}

impl TimestampFormat {
    /// Encoding used by a revision.
    pub fn for_version(version: JournalVersion) -> Self {
        if version.has_clock_timestamps() {
            TimestampFormat::Clock
        } else {
            TimestampFormat::Seconds
        }
    }
}

fn seconds_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").expect("invalid regex"))
}

fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+):([0-5]?[0-9]):([0-5]?[0-9])(?:\.([0-9]+))?$").expect("invalid regex")
    })
}

fn number(token: &str, digits: &str) -> Result<u64, JournalError> {
    digits
        .parse::<u64>()
        .map_err(|_| JournalError::MalformedTimestamp(token.to_string()))
}

/// Decodes a timestamp token into whole seconds since the race start.
///
/// Accepts integer seconds or `h:m:s[.f]`; the fraction is truncated.
pub fn parse_seconds(token: &str) -> Result<u64, JournalError> {
    if seconds_pattern().is_match(token) {
        return number(token, token);
    }
    let captures = clock_pattern()
        .captures(token)
        .ok_or_else(|| JournalError::MalformedTimestamp(token.to_string()))?;
    let hours = number(token, &captures[1])?;
    let minutes = number(token, &captures[2])?;
    let seconds = number(token, &captures[3])?;
    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .ok_or_else(|| JournalError::MalformedTimestamp(token.to_string()))
}

/// Decodes a timestamp token written in a specific encoding.
pub fn parse_seconds_as(token: &str, format: TimestampFormat) -> Result<u64, JournalError> {
    let matches = match format {
        TimestampFormat::Seconds => seconds_pattern().is_match(token),
        TimestampFormat::Clock => clock_pattern().is_match(token),
    };
    if !matches {
        return Err(JournalError::MalformedTimestamp(token.to_string()));
    }
    parse_seconds(token)
}

/// Decodes a timestamp token into an instant anchored at `start`.
pub fn parse(
    token: &str,
    start: DateTime<FixedOffset>,
) -> Result<DateTime<FixedOffset>, JournalError> {
    let seconds = parse_seconds(token)?;
    offset(start, seconds).ok_or_else(|| JournalError::MalformedTimestamp(token.to_string()))
}

/// Adds whole seconds to an instant, `None` on overflow.
pub fn offset(start: DateTime<FixedOffset>, seconds: u64) -> Option<DateTime<FixedOffset>> {
    let seconds = i64::try_from(seconds).ok()?;
    let delta = TimeDelta::try_seconds(seconds)?;
    start.checked_add_signed(delta)
}

/// Whole seconds between `start` and `instant`, clamped at zero.
pub fn seconds_since(instant: DateTime<FixedOffset>, start: DateTime<FixedOffset>) -> u64 {
    u64::try_from((instant - start).num_seconds()).unwrap_or(0)
}

/// Encodes whole seconds since the race start.
pub fn format_seconds(seconds: u64, format: TimestampFormat) -> String {
    match format {
        TimestampFormat::Seconds => seconds.to_string(),
        TimestampFormat::Clock => format!(
            "{:02}:{:02}:{:02}.000",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        ),
    }
}

/// Encodes `instant` relative to `start` in the encoding of `version`.
///
/// Sub-second offsets are dropped.
pub fn format(
    instant: DateTime<FixedOffset>,
    start: DateTime<FixedOffset>,
    version: JournalVersion,
) -> String {
    format_seconds(
        seconds_since(instant, start),
        TimestampFormat::for_version(version),
    )
}

/// Decodes a loosely written duration into milliseconds.
///
/// Accepts `s`, `m:s` or `h:m:s`, with an optional fraction on the last
/// component: `450`, `7:30`, `450.1` and `00:07:30.000` are all valid.
pub fn parse_millis(token: &str) -> Result<u64, JournalError> {
    let malformed = || JournalError::MalformedTimestamp(token.to_string());
    let parts: Vec<&str> = token.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(malformed());
    }
    let mut total: u64 = 0;
    for (i, part) in parts.iter().enumerate() {
        let last = i + 1 == parts.len();
        let (whole, fraction) = match part.split_once('.') {
            Some((whole, fraction)) if last => (whole, Some(fraction)),
            Some(_) => return Err(malformed()),
            None => (*part, None),
        };
        if !seconds_pattern().is_match(whole) {
            return Err(malformed());
        }
        let whole = number(token, whole)?;
        total = total
            .checked_mul(60)
            .and_then(|t| t.checked_add(whole))
            .ok_or_else(malformed)?;
        if let Some(fraction) = fraction {
            if !seconds_pattern().is_match(fraction) {
                return Err(malformed());
            }
            let millis: String = fraction.chars().chain("000".chars()).take(3).collect();
            let millis = number(token, &millis)?;
            return total
                .checked_mul(1000)
                .and_then(|t| t.checked_add(millis))
                .ok_or_else(malformed);
        }
    }
    total.checked_mul(1000).ok_or_else(malformed)
}
