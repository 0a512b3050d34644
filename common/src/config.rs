//! Compile-time configuration: schedule, upstream dataset and screen layout.
//!
//! Values that must hold together are checked with `const` assertions, so a bad edit
//! fails the build instead of the device.

use embedded_graphics::prelude::Point;

// =============================================================================
// Schedule
// =============================================================================

/// Local hour (0-23) of the daily update. The dataset refreshes in the evening.
pub const DAILY_UPDATE_HOUR: u8 = 19;

const _: () = assert!(DAILY_UPDATE_HOUR < 24);

// =============================================================================
// Upstream Dataset
// =============================================================================

/// Host serving the county-level dataset.
pub const DATASET_HOST: &str = "data.cdc.gov";

/// Socrata identifier of the community levels by county dataset.
pub const DATASET_ID: &str = "3nnm-4jni";

/// Public-health guidance page linked by the QR code.
pub const GUIDANCE_URL: &str = "https://www.cdc.gov/coronavirus/2019-ncov/science/community-levels.html";

/// Records requested per run: the current report and the one before it.
pub const RECORD_COUNT: usize = 2;

const _: () = assert!(RECORD_COUNT >= 2);

// =============================================================================
// Display
// =============================================================================

/// Display width in pixels (ST7789 on Pimoroni PIM715: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Number of text rows in the left column.
pub const SUMMARY_ROWS: usize = 6;

/// Vertical distance between row centers.
pub const ROW_HEIGHT: i32 = 36;

/// Vertical center of the first row.
pub const FIRST_ROW_Y: i32 = 24;

/// Left edge of text rows without a glyph (date, county).
pub const LEFT_MARGIN_X: i32 = 10;

/// Horizontal center of the glyph column.
pub const GLYPH_CENTER_X: i32 = 18;

/// Left edge of text rows that follow a glyph.
pub const AFTER_GLYPH_X: i32 = 34;

/// Glyph circle diameter in pixels.
pub const GLYPH_DIAMETER: u32 = 15;

/// Top-left of the "last called" stamp in the right column.
pub const STAMP_POS: Point = Point::new(252, 16);

/// Height of the two-line stamp (15 pixel font).
pub const STAMP_HEIGHT: i32 = 30;

/// Largest QR version the guidance link may use (33x33 modules).
pub const QR_MAX_VERSION: u8 = 4;

/// Pixels per QR module.
pub const QR_MODULE_SIZE: u32 = 2;

/// Light border around the code, in modules.
pub const QR_QUIET_MODULES: u32 = 1;

/// Side of the largest QR code including its border.
pub const QR_SIDE: u32 = (17 + 4 * QR_MAX_VERSION as u32 + 2 * QR_QUIET_MODULES) * QR_MODULE_SIZE;

/// Space between the stamp and the QR code.
pub const QR_GAP: i32 = 10;

/// Top-left of the QR code: under the stamp, two pixels in from the right edge.
pub const QR_POS: Point = Point::new(SCREEN_WIDTH as i32 - QR_SIDE as i32 - 2, STAMP_POS.y + STAMP_HEIGHT + QR_GAP);

const _: () = assert!(FIRST_ROW_Y + ROW_HEIGHT * (SUMMARY_ROWS as i32 - 1) < SCREEN_HEIGHT as i32);
const _: () = assert!(GLYPH_CENTER_X + (GLYPH_DIAMETER as i32) / 2 < AFTER_GLYPH_X);
const _: () = assert!(STAMP_POS.x < SCREEN_WIDTH as i32);
const _: () = assert!(QR_POS.x + QR_SIDE as i32 <= SCREEN_WIDTH as i32);
const _: () = assert!(QR_POS.y + QR_SIDE as i32 <= SCREEN_HEIGHT as i32);

/// Row indices for clearer code.
/// Layout (left column, top to bottom):
///   As of | County | Community Level | Cases | Inpatient Bed | Admissions
pub mod row_idx {
    pub const DATE: usize = 0;
    pub const COUNTY: usize = 1;
    pub const LEVEL: usize = 2;
    pub const CASES: usize = 3;
    pub const INPATIENT: usize = 4;
    pub const ADMISSIONS: usize = 5;
}

/// Vertical center of row `index`.
#[inline]
pub const fn row_y(index: usize) -> i32 { FIRST_ROW_Y + ROW_HEIGHT * index as i32 }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_fit_on_screen() {
        for index in 0..SUMMARY_ROWS {
            let y = row_y(index);
            assert!(y > 0 && y < SCREEN_HEIGHT as i32);
        }
    }

    #[test]
    fn test_row_indices_distinct() {
        let rows = [
            row_idx::DATE,
            row_idx::COUNTY,
            row_idx::LEVEL,
            row_idx::CASES,
            row_idx::INPATIENT,
            row_idx::ADMISSIONS,
        ];
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(*row, i);
        }
        assert_eq!(rows.len(), SUMMARY_ROWS);
    }

    #[test]
    fn test_qr_sits_below_stamp() {
        assert_eq!(QR_SIDE, 70);
        assert_eq!(QR_POS, Point::new(248, 56));
        assert!(QR_POS.y > STAMP_POS.y + STAMP_HEIGHT);
    }

    #[test]
    fn test_update_hour_valid() {
        assert!(DAILY_UPDATE_HOUR < 24);
    }
}
