//! Game buttons, polled once per tick.
//!
//! Both are pulled up and read low while held; the game core treats them
//! as active-low `embedded-hal` inputs. No debouncing: a press is simply
//! whatever level the pin shows when sampled.

use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::board::ButtonResources;

pub struct Buttons {
    /// Restart the session.
    pub a: Input<'static>,
    /// Jump.
    pub b: Input<'static>,
}

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            a: Input::new(res.a, pull_up),
            b: Input::new(res.b, pull_up),
        }
    }
}
