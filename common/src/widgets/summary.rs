//! Summary screen: one text row per metric, the "last called" stamp and a QR code
//! linking the guidance page.
//!
//! ```text
//!      As of: 2026-10-15                      10/19
//!      Erie County                            19:02
//!  (^) Community Level: Medium               +------+
//!  (^) Cases: 241 +21%                       |  QR  |
//!  (o) Inpatient Bed: 4.2%                   +------+
//!   v  Admissions: 18 -10%
//! ```
//!
//! Text is built first ([`SummaryText`]) so its content can be checked without a
//! display; [`draw_summary`] then lays it out.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::primitives::draw_glyph;
use super::qr::draw_qr;
use crate::colors::BLACK;
use crate::config::{
    AFTER_GLYPH_X, GLYPH_CENTER_X, GUIDANCE_URL, LEFT_MARGIN_X, QR_POS, STAMP_POS, SUMMARY_ROWS, row_idx, row_y,
};
use crate::format::{Count, Fraction, PctChange, capitalize};
use crate::metrics::{DerivedMetrics, Trend};
use crate::styles::{ROW_ALIGNED, ROW_STYLE_WHITE, STAMP_ALIGNED};
use crate::trend::Glyph;

/// Maximum characters per row.
pub const ROW_TEXT_LEN: usize = 40;

/// Capacity of the two-line stamp ("12/31\n23:59").
pub const STAMP_TEXT_LEN: usize = 12;

/// Text content of the summary screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryText {
    pub rows: [String<ROW_TEXT_LEN>; SUMMARY_ROWS],
    /// Glyph per row; `None` for rows without a glyph column (date, county).
    pub glyphs: [Option<Glyph>; SUMMARY_ROWS],
    pub stamp: String<STAMP_TEXT_LEN>,
}

impl SummaryText {
    pub fn new(metrics: &DerivedMetrics<'_>) -> Self {
        let mut rows: [String<ROW_TEXT_LEN>; SUMMARY_ROWS] = core::array::from_fn(|_| String::new());
        let mut glyphs = [None; SUMMARY_ROWS];

        push_truncated(&mut rows[row_idx::DATE], "As of: ");
        push_truncated(&mut rows[row_idx::DATE], metrics.date_updated);

        push_truncated(&mut rows[row_idx::COUNTY], metrics.county);

        let level = &metrics.community_level;
        push_truncated(&mut rows[row_idx::LEVEL], "Community Level: ");
        push_truncated(&mut rows[row_idx::LEVEL], &capitalize(level.level));
        glyphs[row_idx::LEVEL] = Some(Glyph::from(level.direction));

        let cases = &metrics.cases;
        let _ = write!(rows[row_idx::CASES], "Cases: {}", Count(cases.value));
        glyphs[row_idx::CASES] = Some(trend_row(&mut rows[row_idx::CASES], cases));

        let inpatient = &metrics.inpatient_bed_utilization;
        let _ = write!(rows[row_idx::INPATIENT], "Inpatient Bed: {}", Fraction(inpatient.value));
        glyphs[row_idx::INPATIENT] = Some(trend_row(&mut rows[row_idx::INPATIENT], inpatient));

        let admissions = &metrics.hospital_admissions;
        let _ = write!(rows[row_idx::ADMISSIONS], "Admissions: {}", Count(admissions.value));
        glyphs[row_idx::ADMISSIONS] = Some(trend_row(&mut rows[row_idx::ADMISSIONS], admissions));

        let mut stamp = String::new();
        let _ = write!(stamp, "{}", metrics.api_last_called.stamp());

        Self { rows, glyphs, stamp }
    }
}

/// Append the percent change (if any) and return the row's glyph.
fn trend_row(
    row: &mut String<ROW_TEXT_LEN>,
    trend: &Trend,
) -> Glyph {
    if let Some(change) = trend.pct_change {
        let _ = write!(row, " {}", PctChange(change));
    }
    Glyph::from(trend.direction)
}

/// Append as much of `text` as fits.
fn push_truncated<const N: usize>(
    out: &mut String<N>,
    text: &str,
) {
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
}

/// Clear the screen and draw the summary for `metrics`.
pub fn draw_summary<D>(
    display: &mut D,
    metrics: &DerivedMetrics<'_>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let text = SummaryText::new(metrics);

    display.clear(BLACK)?;

    for (index, (row, glyph)) in text.rows.iter().zip(text.glyphs).enumerate() {
        let y = row_y(index);
        let x = match glyph {
            Some(glyph) => {
                draw_glyph(display, Point::new(GLYPH_CENTER_X, y), glyph)?;
                AFTER_GLYPH_X
            }
            None => LEFT_MARGIN_X,
        };
        Text::with_text_style(row, Point::new(x, y), ROW_STYLE_WHITE, ROW_ALIGNED).draw(display)?;
    }

    Text::with_text_style(&text.stamp, STAMP_POS, ROW_STYLE_WHITE, STAMP_ALIGNED).draw(display)?;

    draw_qr(display, QR_POS, GUIDANCE_URL)
}

// =============================================================================
// Unit Tests
// =============================================================================
