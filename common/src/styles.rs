//! Pre-computed text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible, so every style used on
//! the summary screen is built at compile time.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_12_POINT;

use crate::colors::WHITE;

/// Row font (`ProFont` 12pt, 8x15 pixels).
pub const ROW_FONT: &MonoFont = &PROFONT_12_POINT;

/// White row text.
pub const ROW_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(ROW_FONT, WHITE);

/// Left aligned, vertically centered on the row's y coordinate.
pub const ROW_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Left aligned, top of the first line at the given y coordinate.
pub const STAMP_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();
