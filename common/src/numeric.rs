//! Numeric field parsing.
//!
//! Every numeric value in a raw record arrives as a string. [`parse_numeric`] is the
//! only place those strings become numbers; what happens on failure is decided by the
//! caller (the metric deriver falls back to `0.0` and records a fault).

use thiserror::Error;

/// Why a numeric field could not be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Field absent or blank.
    #[error("value is missing")]
    Missing,
    /// Not a decimal number.
    #[error("value is not a number")]
    Invalid,
    /// Parsed to NaN or infinity.
    #[error("value is not finite")]
    NonFinite,
    /// Rates, percentages and populations are never negative.
    #[error("value is negative")]
    Negative,
    /// Date string shorter than the expected `YYYY-MM-DD` prefix (found length).
    #[error("date has only {0} characters")]
    TooShort(usize),
}

/// Parse a decimal string into a finite, non-negative `f64`.
///
/// Leading and trailing whitespace is ignored.
pub fn parse_numeric(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Missing);
    }

    let value: f64 = trimmed.parse().map_err(|_| ParseError::Invalid)?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite);
    }
    if value < 0.0 {
        return Err(ParseError::Negative);
    }

    // "-0" parses fine and compares equal to zero; normalize the sign
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// Parse an optional field, treating absence like a blank string.
#[inline]
pub fn parse_optional(raw: Option<&str>) -> Result<f64, ParseError> { raw.map_or(Err(ParseError::Missing), parse_numeric) }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_decimal() {
        assert_eq!(parse_numeric("120.5"), Ok(120.5));
        assert_eq!(parse_numeric("200000"), Ok(200_000.0));
        assert_eq!(parse_numeric("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_numeric("  4.2\n"), Ok(4.2));
    }

    #[test]
    fn test_parse_empty_is_missing() {
        assert_eq!(parse_numeric(""), Err(ParseError::Missing));
        assert_eq!(parse_numeric("   "), Err(ParseError::Missing));
        assert_eq!(parse_optional(None), Err(ParseError::Missing));
    }

    #[test]
    fn test_parse_garbage_is_invalid() {
        assert_eq!(parse_numeric("n/a"), Err(ParseError::Invalid));
        assert_eq!(parse_numeric("12,000"), Err(ParseError::Invalid));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert_eq!(parse_numeric("NaN"), Err(ParseError::NonFinite));
        assert_eq!(parse_numeric("inf"), Err(ParseError::NonFinite));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(parse_numeric("-3.5"), Err(ParseError::Negative));
    }

    #[test]
    fn test_parse_negative_zero_is_zero() {
        let value = parse_numeric("-0").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_parse_optional_present() {
        assert_eq!(parse_optional(Some("7")), Ok(7.0));
    }
}
