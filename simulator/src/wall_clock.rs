//! Clocks for the simulator.

use covid_level_common::time::{LocalTime, TimeError};
use covid_level_pico2::Clock;

/// Current local time of the host.
pub fn local_now() -> Result<LocalTime, TimeError> { LocalTime::from_naive(chrono::Local::now().naive_local()) }

/// Clock stopped at one instant, so a simulated cycle is reproducible.
pub struct FixedClock(pub LocalTime);

impl Clock for FixedClock {
    fn now(&self) -> LocalTime { self.0 }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_clock_reads() {
        let now = local_now().unwrap();
        assert!(now.year() >= 2024);
        assert!(now.seconds_of_day() < 86_400);
    }

    #[test]
    fn test_fixed_clock_does_not_move() {
        let at = LocalTime::parse_iso("2026-10-19T19:02:41").unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }
}
