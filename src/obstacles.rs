//! Fixed slot array of ground-level obstacles.

use crate::config::{
    MAX_OBSTACLES,
    OBSTACLE_SPEED,
    OBSTACLE_WIDTH,
    SPAWN_GAP,
    TRACK_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Obstacle {
    /// Left edge. Goes negative as the obstacle scrolls off.
    pub x: i32,
    pub active: bool,
}

impl Obstacle {
    /// Right edge (exclusive).
    pub const fn right(&self) -> i32 {
        self.x + OBSTACLE_WIDTH
    }

    /// The whole obstacle is left of the screen.
    pub const fn has_escaped(&self) -> bool {
        self.right() <= 0
    }
}

/// What happened to one slot during [`Obstacles::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advance {
    Moved,
    /// The obstacle left the screen; the round is over.
    Escaped,
}

/// The obstacle slots, reused across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Obstacles {
    slots: [Obstacle; MAX_OBSTACLES],
}

impl Obstacles {
    pub const fn new() -> Self {
        Self {
            slots: Self::spawn(),
        }
    }

    /// Slot `i` starts at `TRACK_WIDTH + i * SPAWN_GAP`, just off the right edge.
    const fn spawn() -> [Obstacle; MAX_OBSTACLES] {
        let mut slots = [Obstacle { x: 0, active: true }; MAX_OBSTACLES];
        let mut i = 0;
        while i < MAX_OBSTACLES {
            slots[i].x = TRACK_WIDTH + i as i32 * SPAWN_GAP;
            i += 1;
        }
        slots
    }

    /// Put every slot back at its spawn position, active.
    pub fn reset(&mut self) {
        self.slots = Self::spawn();
    }

    /// Scroll the obstacle in `slot` left by one tick, if it is active.
    ///
    /// Returns `None` for inactive slots, which neither move nor end the round.
    pub fn advance(&mut self, slot: usize) -> Option<Advance> {
        let obstacle = self.slots.get_mut(slot)?;
        if !obstacle.active {
            return None;
        }
        obstacle.x -= OBSTACLE_SPEED;
        Some(if obstacle.has_escaped() {
            Advance::Escaped
        } else {
            Advance::Moved
        })
    }

    /// Take the obstacle in `slot` out of play for the rest of the session.
    pub fn deactivate(&mut self, slot: usize) {
        if let Some(obstacle) = self.slots.get_mut(slot) {
            obstacle.active = false;
        }
    }

    pub fn get(&self, slot: usize) -> Option<&Obstacle> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Obstacle> {
        self.slots.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter()
    }

    /// Active obstacles only, in slot order.
    pub fn active(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter().filter(|o| o.active)
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.slots
    }
}

impl Default for Obstacles {
    fn default() -> Self {
        Self::new()
    }
}
