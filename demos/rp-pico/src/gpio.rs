//! Pin wrappers for the blink-controller hardware traits.

use blink_controller::{Button, Led};
use embedded_hal::digital::{InputPin, OutputPin};

/// LED driven through any embedded-hal output pin.
pub struct GpioLed<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> GpioLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: OutputPin> Led for GpioLed<P> {
    fn set_state(&mut self, on: bool) {
        // RP2040 pin writes are infallible; swallow the Result either way.
        let _ = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}

/// Button sampled through any embedded-hal input pin.
///
/// Wired active-high: the pin to 3V3 through the button, pad pull-down
/// keeping it low when released.
pub struct GpioButton<P: InputPin> {
    pin: P,
}

impl<P: InputPin> GpioButton<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> Button for GpioButton<P> {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}
