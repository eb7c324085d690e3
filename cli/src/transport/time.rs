//! # Timetable Clock Times
//!
//! File: cli/src/transport/time.rs
//! Author: Christi Mahu
//!
//! Train timetables express times as zero-padded 24-hour `"HH:MM"` strings.
//! `ClockTime` parses those strings strictly and orders them by time of day,
//! which for well-formed input is the same order as comparing the strings
//! themselves.
//!
use crate::core::error::TravelError;
use chrono::{NaiveTime, Timelike};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A minute-resolution time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Builds a time from hour and minute, `None` if out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Truncates any `NaiveTime` to the minute.
    ///
    /// A train leaving at 08:00 is no longer "later than now" at 08:00:30,
    /// matching a comparison of the formatted `HH:MM` strings.
    pub fn from_naive(time: NaiveTime) -> Self {
        // hour()/minute() are always in range, so this cannot fail.
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
    }

    /// Parses a strict `HH:MM` string.
    pub fn parse_hhmm(s: &str) -> Result<Self, TravelError> {
        let invalid = |reason| TravelError::InvalidTime {
            value: s.to_string(),
            reason,
        };

        let bytes = s.as_bytes();
        if bytes.len() != 5 {
            return Err(invalid("expected HH:MM format"));
        }
        if bytes[2] != b':' {
            return Err(invalid("expected colon at position 2"));
        }

        let hour = parse_two_digits(&bytes[0..2]).ok_or_else(|| invalid("invalid hour digits"))?;
        if hour > 23 {
            return Err(invalid("hour must be 0-23"));
        }
        let minute =
            parse_two_digits(&bytes[3..5]).ok_or_else(|| invalid("invalid minute digits"))?;
        if minute > 59 {
            return Err(invalid("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| invalid("invalid time"))
    }
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [a @ b'0'..=b'9', b @ b'0'..=b'9'] => Some(u32::from(a - b'0') * 10 + u32::from(b - b'0')),
        _ => None,
    }
}

impl FromStr for ClockTime {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TravelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hhmm(&value)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}
