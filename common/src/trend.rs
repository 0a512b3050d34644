//! Trend direction and percent change between two readings.

/// Direction of change from the previous reading to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Compare two ordered readings. `None` when they are equal.
    pub fn between<T: PartialOrd>(
        current: T,
        previous: T,
    ) -> Option<Self> {
        if current > previous {
            Some(Self::Up)
        } else if current < previous {
            Some(Self::Down)
        } else {
            None
        }
    }
}

/// Indicator drawn next to a metric line.
///
/// Three-way: an absent direction (unchanged, or not comparable) is drawn as `Flat`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Glyph {
    Up,
    Down,
    #[default]
    Flat,
}

impl From<Option<Direction>> for Glyph {
    fn from(direction: Option<Direction>) -> Self {
        match direction {
            Some(Direction::Up) => Self::Up,
            Some(Direction::Down) => Self::Down,
            None => Self::Flat,
        }
    }
}

/// Signed relative change `(current - previous) / previous`.
///
/// Returns `None` when `previous` is zero or when the change is exactly zero.
pub fn percent_change(
    current: f64,
    previous: f64,
) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    let change = (current - previous) / previous;
    if change == 0.0 { None } else { Some(change) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: [(f64, f64); 6] = [(120.5, 100.0), (80.0, 100.0), (0.1, 0.2), (3.0, 1.5), (0.0, 12.0), (1e6, 999_999.0)];

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(2.0, 1.0), Some(Direction::Up));
        assert_eq!(Direction::between(1.0, 2.0), Some(Direction::Down));
        assert_eq!(Direction::between(1.0, 1.0), None);
    }

    #[test]
    fn test_percent_change_formula() {
        for (current, previous) in PAIRS {
            let change = percent_change(current, previous).unwrap();
            assert!((change - (current - previous) / previous).abs() < 1e-12);
        }
    }

    #[test]
    fn test_percent_change_sign_matches_direction() {
        for (current, previous) in PAIRS {
            let change = percent_change(current, previous).unwrap();
            let direction = Direction::between(current, previous).unwrap();
            assert_eq!(change > 0.0, direction == Direction::Up, "{current} vs {previous}");
        }
    }

    #[test]
    fn test_percent_change_unchanged_is_absent() {
        assert_eq!(percent_change(42.0, 42.0), None);
        assert_eq!(percent_change(0.0, 0.0), None);
    }

    #[test]
    fn test_percent_change_zero_previous_is_absent() {
        assert_eq!(percent_change(5.0, 0.0), None);
        assert_eq!(percent_change(0.0, 0.0), None);
    }

    #[test]
    fn test_glyph_from_direction() {
        assert_eq!(Glyph::from(Some(Direction::Up)), Glyph::Up);
        assert_eq!(Glyph::from(Some(Direction::Down)), Glyph::Down);
        assert_eq!(Glyph::from(None), Glyph::Flat);
    }
}
