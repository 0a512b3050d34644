//! Local wall-clock time.
//!
//! No timezone handling: a [`LocalTime`] is whatever the clock collaborator says the
//! local time is. Calendar rules and arithmetic come from chrono's naive date-time,
//! truncated to whole seconds.

use core::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use thiserror::Error;

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: u32 = 3_600;

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Accepted `parse_iso` layouts; anything after the seconds is ignored.
const ISO_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    Date { year: u16, month: u8, day: u8 },
    #[error("{hour:02}:{minute:02}:{second:02} is not a time of day")]
    Time { hour: u8, minute: u8, second: u8 },
    #[error("year {0} out of range")]
    Year(i32),
    #[error("expected YYYY-MM-DDTHH:MM:SS")]
    Format,
}

/// Local timestamp accurate to the second.
///
/// The default is the Unix epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime(NaiveDateTime);

impl LocalTime {
    /// Build a validated timestamp.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .ok_or(TimeError::Date { year, month, day })?;
        let time = date
            .and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
            .ok_or(TimeError::Time { hour, minute, second })?;
        Ok(Self(time))
    }

    /// Wrap a chrono date-time, dropping sub-second precision.
    ///
    /// A leap second folds into the second before it.
    pub fn from_naive(time: NaiveDateTime) -> Result<Self, TimeError> {
        if u16::try_from(time.year()).is_err() {
            return Err(TimeError::Year(time.year()));
        }
        Ok(Self(time.with_nanosecond(0).unwrap_or(time)))
    }

    /// Parse `YYYY-MM-DDTHH:MM:SS` (a space may replace the `T`).
    ///
    /// Anything after the seconds (fraction, offset) is ignored.
    pub fn parse_iso(raw: &str) -> Result<Self, TimeError> {
        let raw = raw.trim();
        ISO_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_and_remainder(raw, format).ok())
            .ok_or(TimeError::Format)
            .and_then(|(time, _rest)| Self::from_naive(time))
    }

    pub const fn as_naive(&self) -> &NaiveDateTime { &self.0 }

    pub fn year(&self) -> u16 { u16::try_from(self.0.year()).unwrap_or(u16::MAX) }

    pub fn month(&self) -> u8 { self.0.month() as u8 }

    pub fn day(&self) -> u8 { self.0.day() as u8 }

    pub fn hour(&self) -> u8 { self.0.hour() as u8 }

    pub fn minute(&self) -> u8 { self.0.minute() as u8 }

    pub fn second(&self) -> u8 { self.0.second() as u8 }

    /// Seconds since local midnight.
    pub fn seconds_of_day(&self) -> u32 { self.0.num_seconds_from_midnight() }

    /// Advance by `seconds`, rolling over days, months and years.
    ///
    /// Saturates at the end of the representable calendar.
    #[must_use]
    pub fn add_seconds(
        &self,
        seconds: u32,
    ) -> Self {
        let later = self.0.checked_add_signed(TimeDelta::seconds(i64::from(seconds)));
        Self(later.unwrap_or(NaiveDateTime::MAX))
    }

    /// "Last called" stamp: `M/D` on the first line, `H:MM` on the second.
    pub fn stamp(&self) -> Stamp<'_> { Stamp(self) }
}

impl From<LocalTime> for NaiveDateTime {
    fn from(time: LocalTime) -> Self { time.0 }
}

impl fmt::Display for LocalTime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Two-line display form of a [`LocalTime`], see [`LocalTime::stamp`].
pub struct Stamp<'a>(&'a LocalTime);

impl fmt::Display for Stamp<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}/{}\n{}:{:02}", self.0.month(), self.0.day(), self.0.hour(), self.0.minute())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
