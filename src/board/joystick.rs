//! Analog joystick axis on ADC1.

use esp_hal::{
    Blocking,
    analog::adc::{
        Adc,
        AdcConfig,
        AdcPin,
        Attenuation,
    },
    peripherals::{
        ADC1,
        GPIO10,
    },
};

use crate::{
    board::JoystickResources,
    config::{
        AXIS_CENTER,
        AXIS_MAX,
    },
    input::AnalogAxis,
};

/// One-shot 12-bit sampling of the stick's VRY output.
pub struct Joystick<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    vry: AdcPin<GPIO10<'d>, ADC1<'d>>,
}

impl<'d> From<JoystickResources<'d>> for Joystick<'d> {
    fn from(res: JoystickResources<'d>) -> Self {
        let mut config = AdcConfig::new();
        // 11 dB attenuation covers the stick's full 0–3.3 V swing.
        let vry = config.enable_pin(res.vry, Attenuation::_11dB);
        Self {
            adc: Adc::new(res.adc, config),
            vry,
        }
    }
}

impl AnalogAxis for Joystick<'_> {
    /// A failed conversion reads as centred, so the player holds still.
    fn read_axis(&mut self) -> u16 {
        match nb::block!(self.adc.read_oneshot(&mut self.vry)) {
            Ok(value) => value.min(AXIS_MAX),
            Err(()) => {
                warn!("joystick ADC conversion failed");
                AXIS_CENTER
            }
        }
    }
}
