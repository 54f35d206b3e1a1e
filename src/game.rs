//! The complete game: session state wired to controls, LED and panel.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
};
use embedded_hal::{
    delay::DelayNs,
    digital::InputPin,
};

use crate::{
    feedback::StatusLed,
    input::{
        AnalogAxis,
        Controls,
    },
    render::{
        Panel,
        render,
    },
    session::{
        Session,
        TickOutcome,
    },
};

/// Owns every collaborator the main loop needs.
///
/// `delay` is a blocking delay; it times the ADC settle and the LED pulse.
/// The pause between ticks is left to the caller.
pub struct Game<X, A, B, L, P, D> {
    session: Session,
    controls: Controls<X, A, B>,
    led: L,
    panel: P,
    delay: D,
}

impl<X, A, B, L, P, D> Game<X, A, B, L, P, D>
where
    X: AnalogAxis,
    A: InputPin<Error = Infallible>,
    B: InputPin<Error = Infallible>,
    L: StatusLed,
    P: Panel,
    D: DelayNs,
{
    /// Switch the LED off, blank the panel and start a fresh session.
    pub fn new(controls: Controls<X, A, B>, led: L, panel: P, delay: D) -> Result<Self, P::Error> {
        let mut game = Self {
            session: Session::new(),
            controls,
            led,
            panel,
            delay,
        };
        game.led.set(false);
        game.blank()?;
        Ok(game)
    }

    pub fn blank(&mut self) -> Result<(), P::Error> {
        self.panel.clear(BinaryColor::Off)?;
        self.panel.flush()
    }

    /// Run one tick: sample, update, flash the LED per hit, render.
    pub fn tick(&mut self) -> Result<TickOutcome, P::Error> {
        let input = self.controls.sample(&mut self.delay);

        let Self {
            session,
            led,
            delay,
            ..
        } = self;
        let outcome = session.tick(&input, |_| led.pulse(&mut *delay));

        render(&self.session, &mut self.panel)?;
        Ok(outcome)
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub const fn panel(&self) -> &P {
        &self.panel
    }

    pub const fn led(&self) -> &L {
        &self.led
    }

    pub const fn delay(&self) -> &D {
        &self.delay
    }
}
