//! Status LED flashed when the player hits an obstacle.

use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
};

use crate::config::LED_PULSE_MS;

/// Anything that can show a single on/off status.
pub trait StatusLed {
    fn set(&mut self, on: bool);

    /// Light the LED for [`LED_PULSE_MS`] and switch it off again.
    ///
    /// Blocks the caller for the whole pulse, so the tick that triggered
    /// it runs long.
    fn pulse(&mut self, delay: &mut impl DelayNs) {
        self.set(true);
        delay.delay_ms(LED_PULSE_MS);
        self.set(false);
    }
}

/// A plain GPIO-driven LED, lit when the pin is high.
pub struct PinLed<P> {
    pin: P,
}

impl<P: OutputPin<Error = Infallible>> PinLed<P> {
    /// Takes the pin and drives it low.
    pub fn new(pin: P) -> Self {
        let mut led = Self { pin };
        led.set(false);
        led
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin<Error = Infallible>> StatusLed for PinLed<P> {
    fn set(&mut self, on: bool) {
        let Ok(()) = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}
