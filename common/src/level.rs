//! Community level classification.
//!
//! The upstream source reports the level as free text ("Low", "MEDIUM", ...). Only the
//! three known levels are ordered; anything else cannot produce a direction.

use crate::numeric::ParseError;
use crate::trend::Direction;

/// Ordinal community level, lowest risk first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CommunityLevel {
    Low,
    Medium,
    High,
}

impl CommunityLevel {
    /// Case-insensitive parse. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ParseError::Missing);
        }
        [Self::Low, Self::Medium, Self::High]
            .into_iter()
            .find(|level| raw.eq_ignore_ascii_case(level.as_str()))
            .ok_or(ParseError::Invalid)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Direction between two readings; `None` unless both levels are known and differ.
pub fn level_direction(
    current: Option<CommunityLevel>,
    previous: Option<CommunityLevel>,
) -> Option<Direction> {
    Direction::between(current?, previous?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn direction(
        current: &str,
        previous: &str,
    ) -> Option<Direction> {
        level_direction(CommunityLevel::parse(current).ok(), CommunityLevel::parse(previous).ok())
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(CommunityLevel::parse("Low"), Ok(CommunityLevel::Low));
        assert_eq!(CommunityLevel::parse("MEDIUM"), Ok(CommunityLevel::Medium));
        assert_eq!(CommunityLevel::parse(" high "), Ok(CommunityLevel::High));
        assert_eq!(CommunityLevel::parse("severe"), Err(ParseError::Invalid));
        assert_eq!(CommunityLevel::parse(" "), Err(ParseError::Missing));
    }

    #[test]
    fn test_ordering() {
        assert!(CommunityLevel::Low < CommunityLevel::Medium);
        assert!(CommunityLevel::Medium < CommunityLevel::High);
    }

    #[test]
    fn test_equal_levels_have_no_direction() {
        for level in ["low", "Medium", "HIGH"] {
            assert_eq!(direction(level, level), None);
        }
        assert_eq!(direction("Low", "LOW"), None);
    }

    #[test]
    fn test_strict_pairs() {
        let cases = [
            ("low", "medium", Direction::Down),
            ("low", "high", Direction::Down),
            ("medium", "high", Direction::Down),
            ("medium", "low", Direction::Up),
            ("high", "low", Direction::Up),
            ("high", "medium", Direction::Up),
        ];
        for (current, previous, expected) in cases {
            assert_eq!(direction(current, previous), Some(expected), "{current} <- {previous}");
        }
    }

    #[test]
    fn test_unknown_level_has_no_direction() {
        assert_eq!(direction("low", "n/a"), None);
        assert_eq!(direction("", "high"), None);
        assert_eq!(level_direction(None, None), None);
    }
}
