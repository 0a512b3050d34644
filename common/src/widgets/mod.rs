//! Drawing for the summary screen.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so the firmware and the
//! simulator share them. Draw errors are returned to the caller.

mod primitives;
mod qr;
mod summary;

pub use primitives::{draw_glyph, glyph_color};
pub use qr::draw_qr;
pub use summary::{ROW_TEXT_LEN, STAMP_TEXT_LEN, SummaryText, draw_summary};
