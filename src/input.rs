//! Joystick and button sampling.
//!
//! Buttons are wired active-low with pull-ups: a pin reading low means the
//! button is held. Pins must be infallible (`Error = Infallible`), which
//! is how esp-hal GPIO inputs are typed; the game has no recovery path for
//! a failed GPIO read.

use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::InputPin,
};

use crate::config::{
    ADC_SETTLE_MS,
    AXIS_CENTER,
    AXIS_LEFT_THRESHOLD,
    AXIS_RIGHT_THRESHOLD,
    STEP_X,
};

/// A single analog axis, sampled in `0..=AXIS_MAX`.
pub trait AnalogAxis {
    fn read_axis(&mut self) -> u16;
}

/// Horizontal intent derived from the joystick axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Steer {
    Left,
    Right,
    /// Inside the dead zone.
    Hold,
}

impl Steer {
    /// Classify a raw reading. The dead zone is inclusive on both ends.
    pub const fn from_axis(value: u16) -> Self {
        if value > AXIS_RIGHT_THRESHOLD {
            Self::Right
        } else if value < AXIS_LEFT_THRESHOLD {
            Self::Left
        } else {
            Self::Hold
        }
    }

    /// Horizontal displacement for one tick.
    pub const fn dx(self) -> i32 {
        match self {
            Self::Left => -STEP_X,
            Self::Right => STEP_X,
            Self::Hold => 0,
        }
    }
}

/// The two game buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// A: restart the session.
    Reset,
    /// B: jump.
    Jump,
}

/// Everything the game reads from the controls in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputFrame {
    pub axis: u16,
    /// Button A: restart the session.
    pub reset: bool,
    /// Button B: jump.
    pub jump: bool,
}

impl InputFrame {
    /// Joystick centred, nothing pressed.
    pub const IDLE: Self = Self {
        axis: AXIS_CENTER,
        reset: false,
        jump: false,
    };

    pub const fn steer(&self) -> Steer {
        Steer::from_axis(self.axis)
    }
}

impl Default for InputFrame {
    fn default() -> Self {
        Self::IDLE
    }
}

/// The joystick axis plus the reset and jump buttons.
pub struct Controls<X, A, B> {
    axis: X,
    reset: A,
    jump: B,
}

impl<X, A, B> Controls<X, A, B>
where
    X: AnalogAxis,
    A: InputPin<Error = Infallible>,
    B: InputPin<Error = Infallible>,
{
    pub const fn new(axis: X, reset: A, jump: B) -> Self {
        Self { axis, reset, jump }
    }

    /// Read the axis and wait for the ADC input to settle.
    pub fn sample_axis(&mut self, delay: &mut impl DelayNs) -> u16 {
        let value = self.axis.read_axis();
        delay.delay_ms(ADC_SETTLE_MS);
        value
    }

    /// True while `button` is held.
    pub fn read_button(&mut self, button: Button) -> bool {
        match button {
            Button::Reset => pressed(&mut self.reset),
            Button::Jump => pressed(&mut self.jump),
        }
    }

    /// Poll every control once: reset button, axis, then jump button.
    pub fn sample(&mut self, delay: &mut impl DelayNs) -> InputFrame {
        let reset = self.read_button(Button::Reset);
        let axis = self.sample_axis(delay);
        let jump = self.read_button(Button::Jump);
        InputFrame { axis, reset, jump }
    }

    pub fn release(self) -> (X, A, B) {
        (self.axis, self.reset, self.jump)
    }
}

/// Active-low read.
fn pressed<P: InputPin<Error = Infallible>>(pin: &mut P) -> bool {
    let Ok(low) = pin.is_low();
    low
}
