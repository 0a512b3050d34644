//! Text formatting for summary values.
//!
//! All formatters are `Display` wrappers so they can be written into fixed-capacity
//! `heapless::String`s without allocation.

use core::fmt;

use heapless::String;

/// Capacity for a capitalized community level label.
pub const LEVEL_LABEL_LEN: usize = 16;

/// First character upper case, the rest lower case ("mEDIUM" -> "Medium").
///
/// Input longer than [`LEVEL_LABEL_LEN`] bytes is cut at a character boundary.
pub fn capitalize(raw: &str) -> String<LEVEL_LABEL_LEN> {
    let mut out = String::new();
    let mut chars = raw.trim().chars();
    if let Some(first) = chars.next() {
        for c in first.to_uppercase().chain(chars.flat_map(char::to_lowercase)) {
            if out.push(c).is_err() {
                break;
            }
        }
    }
    out
}

/// Absolute count rounded to a whole number with thousands separators ("12,345").
#[derive(Clone, Copy, Debug)]
pub struct Count(pub f64);

impl fmt::Display for Count {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        // Counts are never negative; round half up
        let whole = if self.0 > 0.0 { (self.0 + 0.5) as u64 } else { 0 };
        write_grouped(f, whole)
    }
}

fn write_grouped(
    f: &mut fmt::Formatter<'_>,
    value: u64,
) -> fmt::Result {
    if value < 1_000 {
        return write!(f, "{value}");
    }
    write_grouped(f, value / 1_000)?;
    write!(f, ",{:03}", value % 1_000)
}

/// Signed relative change as a whole percentage ("+21%", "-8%").
#[derive(Clone, Copy, Debug)]
pub struct PctChange(pub f64);

impl fmt::Display for PctChange {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:+.0}%", self.0 * 100.0)
    }
}

/// Unit fraction as a percentage with one decimal ("4.2%").
#[derive(Clone, Copy, Debug)]
pub struct Fraction(pub f64);

impl fmt::Display for Fraction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mEDIUM").as_str(), "Medium");
        assert_eq!(capitalize("low").as_str(), "Low");
        assert_eq!(capitalize("HIGH").as_str(), "High");
        assert_eq!(capitalize("").as_str(), "");
    }

    #[test]
    fn test_capitalize_truncates() {
        let label = capitalize("a very long level name indeed");
        assert_eq!(label.len(), LEVEL_LABEL_LEN);
        assert!(label.starts_with("A very"));
    }

    #[test]
    fn test_count_grouping() {
        assert_eq!(Count(0.0).to_string(), "0");
        assert_eq!(Count(241.0).to_string(), "241");
        assert_eq!(Count(999.4).to_string(), "999");
        assert_eq!(Count(999.5).to_string(), "1,000");
        assert_eq!(Count(1_234_567.0).to_string(), "1,234,567");
        assert_eq!(Count(10_005.0).to_string(), "10,005");
    }

    #[test]
    fn test_pct_change() {
        assert_eq!(PctChange(0.21).to_string(), "+21%");
        assert_eq!(PctChange(-0.08).to_string(), "-8%");
        assert_eq!(PctChange(1.5).to_string(), "+150%");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(Fraction(0.042).to_string(), "4.2%");
        assert_eq!(Fraction(0.0).to_string(), "0.0%");
    }
}
