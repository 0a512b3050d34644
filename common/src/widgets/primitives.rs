//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::colors::{GRAY, GREEN, RED};
use crate::config::GLYPH_DIAMETER;
use crate::trend::Glyph;

const GLYPH_STROKE: u32 = 2;

/// Half the glyph height, used for arrow and chevron geometry.
const ARM: i32 = (GLYPH_DIAMETER as i32) / 2 - 2;

/// Color of a trend glyph. Rising numbers are bad news.
pub const fn glyph_color(glyph: Glyph) -> Rgb565 {
    match glyph {
        Glyph::Up => RED,
        Glyph::Down => GREEN,
        Glyph::Flat => GRAY,
    }
}

/// Draw a trend glyph centered on `center`.
///
/// - `Up`: chevron inside a ring
/// - `Down`: plain downward arrow
/// - `Flat`: empty ring
pub fn draw_glyph<D>(
    display: &mut D,
    center: Point,
    glyph: Glyph,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(glyph_color(glyph), GLYPH_STROKE);
    let Point { x, y } = center;

    match glyph {
        Glyph::Up => {
            Circle::with_center(center, GLYPH_DIAMETER).into_styled(style).draw(display)?;
            Line::new(Point::new(x - 3, y + 2), Point::new(x, y - 2))
                .into_styled(style)
                .draw(display)?;
            Line::new(Point::new(x + 3, y + 2), Point::new(x, y - 2))
                .into_styled(style)
                .draw(display)?;
        }
        Glyph::Down => {
            Line::new(Point::new(x, y - ARM), Point::new(x, y + ARM))
                .into_styled(style)
                .draw(display)?;
            Line::new(Point::new(x - 4, y + ARM - 4), Point::new(x, y + ARM))
                .into_styled(style)
                .draw(display)?;
            Line::new(Point::new(x + 4, y + ARM - 4), Point::new(x, y + ARM))
                .into_styled(style)
                .draw(display)?;
        }
        Glyph::Flat => {
            Circle::with_center(center, GLYPH_DIAMETER).into_styled(style).draw(display)?;
        }
    }
    Ok(())
}
