//! Display driver for Pimoroni PIM715 Display Pack 2.8" (ST7789).
//!
//! Pin mapping for PIM715:
//! - CS: GPIO17
//! - DC: GPIO16
//! - CLK: GPIO18 (SPI0 CLK)
//! - MOSI: GPIO19 (SPI0 TX)
//! - Backlight: GPIO20
//! - Reset: Tied to RUN pin (resets with Pico)

use display_interface_spi::SPIInterface;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Config as SpiConfig, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};
use thiserror::Error;

/// Display type alias for the ST7789 on PIM715 (no reset pin).
pub type Pim715Display<'d> =
    mipidsi::Display<SPIInterface<ExclusiveDevice<Spi<'d, SPI0, Blocking>, Output<'d>, NoDelay>, Output<'d>>, ST7789, NoResetPin>;

#[derive(Clone, Copy, Debug, Error)]
pub enum DisplayInitError {
    #[error("chip select pin could not be driven")]
    ChipSelect,
    #[error("ST7789 did not accept the init sequence")]
    Controller,
}

/// Initialize the PIM715 display in landscape (320x240).
pub fn init_display<'d>(
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    dc: Output<'d>,
) -> Result<Pim715Display<'d>, DisplayInitError> {
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).map_err(|_| DisplayInitError::ChipSelect)?;
    let di = SPIInterface::new(spi_device, dc);

    // Native panel is 240x320 portrait, rotated 90 degrees
    Builder::new(ST7789, di)
        .display_size(240, 320)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut embassy_time::Delay)
        .map_err(|_| DisplayInitError::Controller)
}

/// SPI configuration for the ST7789 display.
///
/// The screen is redrawn once a day, so a conservative 40MHz is plenty.
pub fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 40_000_000;
    config
}
