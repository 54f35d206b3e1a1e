//! Player sprite and its vertical integrator.

use crate::config::{
    GRAVITY,
    GROUND_Y,
    JUMP_STRENGTH,
    MAX_FALL_SPEED,
    MAX_PLAYER_X,
    PLAYER_START_X,
};

/// The player sprite. `x`/`y` is the top-left corner.
///
/// `y` never ends a tick below [`GROUND_Y`] and `x` stays inside
/// `0..=MAX_PLAYER_X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub velocity_y: i32,
    pub is_jumping: bool,
}

impl Player {
    /// Standing on the platform at the start position.
    pub const START: Self = Self {
        x: PLAYER_START_X,
        y: GROUND_Y,
        velocity_y: 0,
        is_jumping: false,
    };

    pub const fn on_ground(&self) -> bool {
        self.y == GROUND_Y
    }

    /// Move to `new_x` if the whole sprite would stay on the track.
    ///
    /// Out-of-range requests are dropped, not clamped.
    pub fn update_position(&mut self, new_x: i32) {
        if (0..=MAX_PLAYER_X).contains(&new_x) {
            self.x = new_x;
        }
    }

    /// Start a hop. Ignored while airborne.
    pub fn jump(&mut self) {
        if self.on_ground() {
            self.is_jumping = true;
            self.velocity_y = -JUMP_STRENGTH;
        }
    }

    /// Advance one tick of gravity and land on the ground line.
    pub fn fall(&mut self) {
        self.velocity_y = (self.velocity_y + GRAVITY).min(MAX_FALL_SPEED);
        self.y += self.velocity_y;

        if self.y >= GROUND_Y {
            self.y = GROUND_Y;
            self.velocity_y = 0;
            self.is_jumping = false;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::START
    }
}
