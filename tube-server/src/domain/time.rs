//! Clock time handling for TfL timestamps.
//!
//! TfL reports journey times as ISO 8601 date-times, usually without an
//! offset (London wall-clock), occasionally with one. The UI only shows the
//! local 24-hour `HH:MM`, so that is all we keep.

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// A local wall-clock time of day with minute precision.
///
/// # Examples
///
/// ```
/// use tube_server::domain::ClockTime;
///
/// let t = ClockTime::parse_tfl("2024-01-15T09:05:00").unwrap();
/// assert_eq!(t.to_string(), "09:05");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Create a clock time from hour and minute.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    /// Parse a TfL timestamp.
    ///
    /// Timestamps carrying an offset are converted to the server's local
    /// time zone. Timestamps without one are already local wall-clock time.
    /// Seconds are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tube_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_tfl("2024-01-15T23:59:59").is_ok());
    /// assert!(ClockTime::parse_tfl("2024-01-15T10:00:00.000").is_ok());
    /// assert!(ClockTime::parse_tfl("2024-01-15T10:00:00Z").is_ok());
    ///
    /// assert!(ClockTime::parse_tfl("10:00").is_err());
    /// assert!(ClockTime::parse_tfl("").is_err());
    /// ```
    pub fn parse_tfl(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeError::new(s, "empty"));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::truncate(dt.with_timezone(&Local).time()));
        }

        s.parse::<NaiveDateTime>()
            .map(|dt| Self::truncate(dt.time()))
            .map_err(|_| TimeError::new(s, "expected ISO 8601 date-time"))
    }

    fn truncate(time: NaiveTime) -> Self {
        // hour/minute of a valid NaiveTime always form a valid NaiveTime
        ClockTime(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({})", self)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
