//! QR code drawn module by module, without a heap.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use qrcodegen_no_heap::{QrCode, QrCodeEcc, Version};

use crate::colors::{BLACK, WHITE};
use crate::config::{QR_MAX_VERSION, QR_MODULE_SIZE, QR_QUIET_MODULES};

const MAX_VERSION: Version = Version::new(QR_MAX_VERSION);

/// Scratch and output buffer size for codes up to [`MAX_VERSION`].
const BUFFER_LEN: usize = MAX_VERSION.buffer_len();

/// Draw `text` as a QR code, border included, with its top-left corner at `top_left`.
///
/// Dark modules are black on a white field. Text that does not fit in
/// [`QR_MAX_VERSION`] draws nothing.
pub fn draw_qr<D>(
    display: &mut D,
    top_left: Point,
    text: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut temp = [0u8; BUFFER_LEN];
    let mut out = [0u8; BUFFER_LEN];
    let Ok(qr) = QrCode::encode_text(text, &mut temp, &mut out, QrCodeEcc::Low, Version::MIN, MAX_VERSION, None, true)
    else {
        return Ok(());
    };

    let side = (qr.size() as u32 + 2 * QR_QUIET_MODULES) * QR_MODULE_SIZE;
    Rectangle::new(top_left, Size::new_equal(side))
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)?;

    let origin = top_left + Point::new_equal((QR_QUIET_MODULES * QR_MODULE_SIZE) as i32);
    let module = Size::new_equal(QR_MODULE_SIZE);
    for y in 0..qr.size() {
        for x in (0..qr.size()).filter(|&x| qr.get_module(x, y)) {
            let corner = origin + Point::new(x, y) * QR_MODULE_SIZE as i32;
            display.fill_solid(&Rectangle::new(corner, module), BLACK)?;
        }
    }

    Ok(())
}
