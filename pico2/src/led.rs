//! PIM715 RGB LED as the status light.
//!
//! Channels are active-low: driving a pin low lights it.

use covid_level_pico2::{Status, StatusLight};
use embedded_hal::digital::{OutputPin, PinState};

pub struct RgbLed<P> {
    red: P,
    green: P,
    blue: P,
}

impl<P: OutputPin> RgbLed<P> {
    /// Takes pins already configured as outputs. The LED starts dark.
    pub fn new(
        red: P,
        green: P,
        blue: P,
    ) -> Self {
        let mut led = Self { red, green, blue };
        led.show(Status::Off);
        led
    }
}

impl<P: OutputPin> StatusLight for RgbLed<P> {
    fn show(
        &mut self,
        status: Status,
    ) {
        let (r, g, b) = status.channels();
        // GPIO writes on the RP2350 cannot fail
        let _ = self.red.set_state(PinState::from(!r));
        let _ = self.green.set_state(PinState::from(!g));
        let _ = self.blue.set_state(PinState::from(!b));
    }
}
