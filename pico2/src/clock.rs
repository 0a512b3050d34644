//! Wall clock without a real-time clock chip.
//!
//! The RP2350 has no battery-backed clock, so local time is a fixed boot time plus
//! the monotonic uptime. The boot time can be baked in at build time with
//! `COVID_LEVEL_BOOT_TIME="2026-10-19T18:55:00"`.

use covid_level_common::time::{LocalTime, TimeError};

use crate::device::Clock;

/// Boot time used when none is configured: midnight, 1 January 2026.
pub fn fallback_boot_time() -> LocalTime { LocalTime::new(2026, 1, 1, 0, 0, 0).unwrap_or_default() }

/// Parse a configured boot time, or fall back to [`fallback_boot_time`] if unset.
pub fn boot_time(configured: Option<&str>) -> Result<LocalTime, TimeError> {
    configured.map_or_else(|| Ok(fallback_boot_time()), LocalTime::parse_iso)
}

/// Local time derived from a boot time and an uptime source in whole seconds.
pub struct UptimeClock<F> {
    boot: LocalTime,
    uptime_secs: F,
}

impl<F: Fn() -> u64> UptimeClock<F> {
    pub const fn new(
        boot: LocalTime,
        uptime_secs: F,
    ) -> Self {
        Self { boot, uptime_secs }
    }

    pub const fn boot(&self) -> LocalTime { self.boot }
}

impl<F: Fn() -> u64> Clock for UptimeClock<F> {
    fn now(&self) -> LocalTime {
        // u32 seconds covers 136 years of uptime
        let elapsed = u32::try_from((self.uptime_secs)()).unwrap_or(u32::MAX);
        self.boot.add_seconds(elapsed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[test]
    fn test_boot_time_default() {
        let boot = boot_time(None).unwrap();
        assert_eq!(boot, fallback_boot_time());
        assert_eq!(boot.to_string(), "2026-01-01 00:00:00");
    }

    #[test]
    fn test_boot_time_configured() {
        let boot = boot_time(Some("2026-10-19T18:55:00")).unwrap();
        assert_eq!((boot.hour(), boot.minute()), (18, 55));
        assert!(boot_time(Some("yesterday")).is_err());
    }

    #[test]
    fn test_now_follows_uptime() {
        let uptime = Cell::new(0);
        let clock = UptimeClock::new(boot_time(Some("2026-10-19T18:55:00")).unwrap(), || uptime.get());
        assert_eq!(clock.now(), clock.boot());

        uptime.set(5 * 60 + 30);
        let now = clock.now();
        assert_eq!((now.hour(), now.minute(), now.second()), (19, 0, 30));

        // Crosses midnight into the next day
        uptime.set(6 * 3_600);
        let now = clock.now();
        assert_eq!((now.month(), now.day(), now.hour(), now.minute()), (10, 20, 0, 55));
    }
}
