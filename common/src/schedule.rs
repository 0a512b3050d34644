//! Daily wake-up scheduling.
//!
//! The device runs once a day at a fixed local hour. After each run it computes how
//! long to stay suspended until the next occurrence of that hour.
//!
//! # Local Clock Only
//!
//! The target is built from the current date's fields, so a daylight-saving change
//! between now and the target shifts the wake-up by the size of the change. The next
//! run then schedules from the correct local time again.

use core::fmt;
use core::time::Duration;

use thiserror::Error;

use crate::time::{LocalTime, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("update hour {0} is not in 0..=23")]
    InvalidHour(u8),
}

/// Hour of day (0-23) at which the daily update runs, on the hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateHour(u8);

impl UpdateHour {
    pub const fn new(hour: u8) -> Result<Self, ScheduleError> {
        if hour > 23 {
            Err(ScheduleError::InvalidHour(hour))
        } else {
            Ok(Self(hour))
        }
    }

    pub const fn get(self) -> u8 { self.0 }

    const fn seconds_of_day(self) -> u32 { self.0 as u32 * SECONDS_PER_HOUR }
}

/// Time to stay suspended before the next run. Always below 24 hours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct WakeSchedule {
    seconds: u32,
}

impl WakeSchedule {
    #[inline]
    pub const fn seconds(self) -> u32 { self.seconds }

    #[inline]
    pub const fn as_duration(self) -> Duration { Duration::from_secs(self.seconds as u64) }

    /// Whole hours, for diagnostics.
    #[inline]
    pub const fn hours(self) -> u32 { self.seconds / SECONDS_PER_HOUR }

    /// Whole minutes past [`hours`](Self::hours), for diagnostics.
    #[inline]
    pub const fn minutes(self) -> u32 { (self.seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE }
}

impl fmt::Display for WakeSchedule {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} hours, {} minutes", self.hours(), self.minutes())
    }
}

/// Seconds from `now` until the next `at` o'clock on the local clock.
///
/// If the hour has already passed today the result wraps to tomorrow. Exactly on the
/// hour gives zero.
pub fn next_wake(
    now: &LocalTime,
    at: UpdateHour,
) -> WakeSchedule {
    let mut remaining = at.seconds_of_day() as i64 - now.seconds_of_day() as i64;
    if remaining < 0 {
        remaining += SECONDS_PER_DAY as i64;
    }
    WakeSchedule {
        seconds: remaining as u32,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today_at(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> LocalTime {
        LocalTime::new(2026, 10, 19, hour, minute, second).unwrap()
    }

    fn seven_pm() -> UpdateHour { UpdateHour::new(19).unwrap() }

    #[test]
    fn test_update_hour_range() {
        assert!(UpdateHour::new(0).is_ok());
        assert!(UpdateHour::new(23).is_ok());
        assert_eq!(UpdateHour::new(24), Err(ScheduleError::InvalidHour(24)));
    }

    #[test]
    fn test_after_target_wraps_to_tomorrow() {
        let schedule = next_wake(&today_at(20, 0, 0), seven_pm());
        assert_eq!(schedule.seconds(), 23 * 3_600);
    }

    #[test]
    fn test_before_target_same_day() {
        let schedule = next_wake(&today_at(18, 0, 0), seven_pm());
        assert_eq!(schedule.seconds(), 3_600);
    }

    #[test]
    fn test_exactly_on_target_is_zero() {
        assert_eq!(next_wake(&today_at(19, 0, 0), seven_pm()).seconds(), 0);
    }

    #[test]
    fn test_one_second_after_target() {
        assert_eq!(next_wake(&today_at(19, 0, 1), seven_pm()).seconds(), 86_399);
    }

    #[test]
    fn test_last_second_before_midnight_target() {
        let schedule = next_wake(&today_at(23, 59, 59), UpdateHour::new(0).unwrap());
        assert_eq!(schedule.seconds(), 1);
    }

    #[test]
    fn test_always_within_one_day() {
        for target in 0..24 {
            let at = UpdateHour::new(target).unwrap();
            for hour in 0..24 {
                for minute in (0..60).step_by(7) {
                    for second in [0, 30, 59] {
                        let schedule = next_wake(&today_at(hour, minute, second), at);
                        assert!(schedule.seconds() < SECONDS_PER_DAY);
                        // Waking after the computed duration lands on the target hour
                        let wake = today_at(hour, minute, second).add_seconds(schedule.seconds());
                        assert_eq!((wake.hour(), wake.minute(), wake.second()), (target, 0, 0));
                    }
                }
            }
        }
    }

    #[test]
    fn test_diagnostic_split_uses_full_hours() {
        let schedule = next_wake(&today_at(20, 0, 0), seven_pm());
        assert_eq!(schedule.hours(), 23);
        assert_eq!(schedule.minutes(), 0);

        let schedule = next_wake(&today_at(6, 15, 0), seven_pm());
        assert_eq!((schedule.hours(), schedule.minutes()), (12, 45));
    }

    #[test]
    fn test_display() {
        let schedule = next_wake(&today_at(17, 30, 0), seven_pm());
        assert_eq!(schedule.to_string(), "1 hours, 30 minutes");
    }

    #[test]
    fn test_as_duration() {
        let schedule = next_wake(&today_at(18, 0, 0), seven_pm());
        assert_eq!(schedule.as_duration(), Duration::from_secs(3_600));
    }
}
