//! Color constants for the summary screen.
//!
//! The screen is white text on black; only the trend glyphs use color so a change
//! stands out at a glance.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Row and stamp text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Rising glyph: the situation is getting worse.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Falling glyph.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Mid gray for the unchanged glyph.
/// RGB565: (16, 32, 16) - roughly 50% brightness.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);
