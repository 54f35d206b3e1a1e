//! WS2812 LED strip used as the status LED.
//!
//! All ten LEDs light together; the game only needs on/off.

extern crate alloc;

use embedded_hal::delay::DelayNs;
use esp_hal::{
    Blocking,
    delay::Delay,
    gpio::Level,
    rmt::{
        PulseCode,
        Tx,
    },
};
use palette::Srgb;

use crate::feedback::StatusLed;

/// Number of WS2812 LEDs on the badge.
pub const LED_COUNT: usize = 10;

/// Colour shown while the status LED is lit. Kept dim; the LEDs are bright.
const LIT: Srgb<u8> = Srgb::new(32, 0, 0);
const DARK: Srgb<u8> = Srgb::new(0, 0, 0);

/// WS2812 LED strip driver.
///
/// Maintains an in-memory framebuffer that is sent to hardware
/// with [`flush`](Leds::flush).
pub struct Leds<'a> {
    channel: Option<esp_hal::rmt::Channel<'a, Blocking, Tx>>,
    framebuffer: [Srgb<u8>; LED_COUNT],
    delay: Delay,
}

impl<'a> Leds<'a> {
    pub fn new(channel: esp_hal::rmt::Channel<'a, Blocking, Tx>) -> Self {
        Self {
            channel: Some(channel),
            framebuffer: [DARK; LED_COUNT],
            delay: Delay::new(),
        }
    }

    /// Send the framebuffer to the strip, blocking until it is latched.
    pub fn flush(&mut self) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        let pulses = self
            .framebuffer
            .iter()
            .flat_map(|color| {
                // WS2812 expects GRB byte order
                [
                    Self::byte_to_pulses(color.green),
                    Self::byte_to_pulses(color.red),
                    Self::byte_to_pulses(color.blue),
                ]
                .into_iter()
                .flatten()
            })
            .chain(core::iter::once(PulseCode::end_marker()))
            .collect::<alloc::vec::Vec<_>>();

        let transaction = match channel.transmit(&pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });

        // WS2812 reset time
        self.delay.delay_us(50);
    }

    /// Fill all LEDs with one colour.
    pub fn fill(&mut self, color: Srgb<u8>) {
        self.framebuffer.fill(color);
    }

    // ── Internal helpers ────────────────────────────────────────────────

    /// WS2812 bit timing at 40 MHz RMT clock.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
        let mut pulses = [PulseCode::default(); 8];
        for (i, pulse) in pulses.iter_mut().enumerate() {
            *pulse = Self::bit_to_pulse((byte >> (7 - i)) & 1 != 0);
        }
        pulses
    }
}

impl StatusLed for Leds<'_> {
    fn set(&mut self, on: bool) {
        self.fill(if on { LIT } else { DARK });
        self.flush();
    }
}
