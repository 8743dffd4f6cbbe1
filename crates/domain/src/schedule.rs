use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

pub const DEFAULT_START: &str = "00:00";
pub const DEFAULT_END: &str = "23:59";

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Daily time window in 24-hour `HH:MM` form.
///
/// The endpoints are kept as the strings received from the backend so a
/// malformed value round-trips unchanged; parsing happens on every
/// [`Schedule::contains`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::all_day()
    }
}

impl Schedule {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn all_day() -> Self {
        Self::new(DEFAULT_START, DEFAULT_END)
    }

    /// Builds a schedule from possibly-missing endpoints, substituting the
    /// all-day defaults for empty parts.
    pub fn with_defaults(start: Option<&str>, end: Option<&str>) -> Self {
        let start = start.map(str::trim).filter(|s| !s.is_empty());
        let end = end.map(str::trim).filter(|s| !s.is_empty());
        Self::new(start.unwrap_or(DEFAULT_START), end.unwrap_or(DEFAULT_END))
    }

    /// Parses the `"HH:MM to HH:MM"` display form.
    pub fn parse_range(text: &str) -> Self {
        let mut parts = text.split(" to ");
        let start = parts.next();
        let end = parts.next();
        Self::with_defaults(start, end)
    }

    /// Strict parse for operator input: both endpoints must be valid `HH:MM`.
    /// Empty endpoints fall back to the all-day defaults.
    pub fn parse_strict(start: &str, end: &str) -> Result<Self, DomainError> {
        let schedule = Self::with_defaults(Some(start), Some(end));
        for endpoint in [&schedule.start, &schedule.end] {
            NaiveTime::parse_from_str(endpoint, "%H:%M").map_err(|_| {
                DomainError::InvalidSchedule(format!("'{}' is not a valid HH:MM time", endpoint))
            })?;
        }
        Ok(schedule)
    }

    pub fn start_minute(&self) -> u32 {
        minutes_since_midnight(&self.start, DEFAULT_START)
    }

    pub fn end_minute(&self) -> u32 {
        minutes_since_midnight(&self.end, DEFAULT_END)
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start_minute() > self.end_minute()
    }

    pub fn contains(&self, now: NaiveTime) -> bool {
        self.contains_minute(now.hour() * 60 + now.minute())
    }

    /// Inclusive on both ends. When `start > end` the window covers
    /// `[start, 24:00) ∪ [00:00, end]`.
    pub fn contains_minute(&self, minute: u32) -> bool {
        let minute = minute % MINUTES_PER_DAY;
        let start = self.start_minute();
        let end = self.end_minute();

        if start <= end {
            minute >= start && minute <= end
        } else {
            minute >= start || minute <= end
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.is_empty() && self.end.is_empty() {
            return f.write_str("All Day");
        }
        let start = if self.start.is_empty() { DEFAULT_START } else { &self.start };
        let end = if self.end.is_empty() { DEFAULT_END } else { &self.end };
        write!(f, "{} to {}", start, end)
    }
}

/// `None` is an absent schedule, which is always in window.
pub fn is_now_in_schedule(schedule: Option<&Schedule>, now: NaiveTime) -> bool {
    schedule.map_or(true, |s| s.contains(now))
}

fn minutes_since_midnight(hhmm: &str, fallback: &str) -> u32 {
    let text = if hhmm.trim().is_empty() { fallback } else { hhmm };
    let mut parts = text.split(':');
    let hours = parts.next().map(leading_integer).unwrap_or(0);
    let minutes = parts.next().map(leading_integer).unwrap_or(0);
    hours * 60 + minutes
}

/// Reads the leading run of ASCII digits, `0` when there is none.
fn leading_integer(text: &str) -> u32 {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(4)
        .collect();
    digits.parse().unwrap_or(0)
}
