//! One play session: the player plus the obstacle slots.

use crate::{
    collision::check_collision,
    config::MAX_OBSTACLES,
    input::InputFrame,
    obstacles::{
        Advance,
        Obstacles,
    },
    physics::Player,
};

/// Why a session started over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetCause {
    /// The reset button was held.
    Button,
    /// The obstacle in this slot scrolled off the left edge.
    Escaped(usize),
}

/// What one [`Session::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Set when the reset button restarted the session at the start of the tick.
    pub manual_reset: bool,
    /// Slot whose obstacle escaped, ending the round.
    pub round_over: Option<usize>,
    /// Obstacles hit this tick.
    pub hits: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    player: Player,
    obstacles: Obstacles,
}

impl Session {
    pub const fn new() -> Self {
        Self {
            player: Player::START,
            obstacles: Obstacles::new(),
        }
    }

    /// Back to the start position with every obstacle respawned.
    pub fn reset(&mut self) {
        self.player = Player::START;
        self.obstacles.reset();
    }

    fn restart(&mut self, cause: ResetCause) {
        match cause {
            ResetCause::Button => info!("session reset by button"),
            ResetCause::Escaped(slot) => info!("obstacle {} escaped, round over", slot),
        }
        self.reset();
    }

    /// Advance the game by one tick.
    ///
    /// Order: reset button, horizontal move, jump, gravity, then each
    /// obstacle slot in turn (scroll, escape check, collision). An escaping
    /// obstacle resets the session and skips the remaining slots.
    /// `on_hit` runs with the slot index right after that obstacle is
    /// knocked out, before later slots are processed.
    pub fn tick(&mut self, input: &InputFrame, mut on_hit: impl FnMut(usize)) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if input.reset {
            self.restart(ResetCause::Button);
            outcome.manual_reset = true;
        }

        self.player
            .update_position(self.player.x + input.steer().dx());

        if input.jump {
            self.player.jump();
        }
        self.player.fall();

        for slot in 0..MAX_OBSTACLES {
            match self.obstacles.advance(slot) {
                None => continue,
                Some(Advance::Escaped) => {
                    self.restart(ResetCause::Escaped(slot));
                    outcome.round_over = Some(slot);
                    break;
                }
                Some(Advance::Moved) => {}
            }

            if self
                .obstacles
                .get(slot)
                .is_some_and(|obstacle| check_collision(&self.player, obstacle))
            {
                self.obstacles.deactivate(slot);
                outcome.hits += 1;
                debug!("hit obstacle {}", slot);
                on_hit(slot);
            }
        }

        outcome
    }

    pub const fn player(&self) -> &Player {
        &self.player
    }

    pub const fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub const fn obstacles(&self) -> &Obstacles {
        &self.obstacles
    }

    pub const fn obstacles_mut(&mut self) -> &mut Obstacles {
        &mut self.obstacles
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::GROUND_Y,
        obstacles::Obstacle,
    };

    fn steer(axis: u16) -> InputFrame {
        InputFrame {
            axis,
            ..InputFrame::IDLE
        }
    }

    const RESET: InputFrame = InputFrame {
        reset: true,
        ..InputFrame::IDLE
    };

    const JUMP: InputFrame = InputFrame {
        jump: true,
        ..InputFrame::IDLE
    };

    fn xs(session: &Session) -> [i32; MAX_OBSTACLES] {
        core::array::from_fn(|i| session.obstacles().as_slice()[i].x)
    }

    #[test]
    fn horizontal_steering() {
        let mut session = Session::new();
        session.tick(&steer(3500), |_| {});
        assert_eq!(session.player().x, 62);
        session.tick(&steer(500), |_| {});
        assert_eq!(session.player().x, 60);
        session.tick(&steer(2000), |_| {});
        assert_eq!(session.player().x, 60);
    }

    #[test]
    fn steering_stops_at_track_edge() {
        let mut session = Session::new();
        session.player_mut().x = 119;
        session.tick(&steer(4095), |_| {});
        assert_eq!(session.player().x, 119);
        session.player_mut().x = 1;
        session.tick(&steer(0), |_| {});
        assert_eq!(session.player().x, 1);
    }

    #[test]
    fn obstacles_scroll() {
        let mut session = Session::new();
        let outcome = session.tick(&InputFrame::IDLE, |_| {});
        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(xs(&session), [126, 166, 206, 246]);
    }

    #[test]
    fn reset_button_restarts_before_moving() {
        let mut session = Session::new();
        for _ in 0..10 {
            session.tick(&JUMP, |_| {});
        }
        session.obstacles_mut().deactivate(3);

        let outcome = session.tick(&RESET, |_| {});
        assert!(outcome.manual_reset);
        assert_eq!(*session.player(), Player::START);
        // Respawned and then scrolled once in the same tick.
        assert_eq!(xs(&session), [126, 166, 206, 246]);
        assert!(session.obstacles().iter().all(|o| o.active));
    }

    #[test]
    fn escape_ends_round() {
        let mut session = Session::new();
        session.player_mut().x = 10;
        if let Some(obstacle) = session.obstacles_mut().get_mut(0) {
            obstacle.x = -4;
        }

        let outcome = session.tick(&InputFrame::IDLE, |_| {});
        assert_eq!(outcome.round_over, None);
        assert_eq!(xs(&session)[0], -6);

        let outcome = session.tick(&InputFrame::IDLE, |_| {});
        assert_eq!(outcome.round_over, Some(0));
        assert_eq!(*session.player(), Player::START);
        // Later slots are not scrolled once the round ends.
        assert_eq!(xs(&session), [128, 168, 208, 248]);
    }

    #[test]
    fn escape_skips_remaining_slots() {
        let mut session = Session::new();
        if let Some(obstacle) = session.obstacles_mut().get_mut(2) {
            obstacle.x = -6;
        }
        let mut hit = false;
        let outcome = session.tick(&InputFrame::IDLE, |_| hit = true);
        assert_eq!(outcome.round_over, Some(2));
        assert_eq!(outcome.hits, 0);
        assert!(!hit);
        assert_eq!(xs(&session), [128, 168, 208, 248]);
    }

    #[test]
    fn hit_deactivates_only_that_slot() {
        let mut session = Session::new();
        session.player_mut().x = 120;
        let mut slots = [false; MAX_OBSTACLES];
        // Slot 0 reaches x = 126 after one tick; player spans 120..128.
        let outcome = session.tick(&InputFrame::IDLE, |slot| slots[slot] = true);
        assert_eq!(outcome.hits, 1);
        assert_eq!(slots, [true, false, false, false]);
        assert_eq!(
            session.obstacles().as_slice(),
            &[
                Obstacle {
                    x: 126,
                    active: false,
                },
                Obstacle {
                    x: 166,
                    active: true,
                },
                Obstacle {
                    x: 206,
                    active: true,
                },
                Obstacle {
                    x: 246,
                    active: true,
                },
            ]
        );
    }

    #[test]
    fn airborne_player_passes_over() {
        let mut session = Session::new();
        session.player_mut().x = 116;
        session.player_mut().y = GROUND_Y - 30;
        session.player_mut().is_jumping = true;
        let outcome = session.tick(&InputFrame::IDLE, |_| {});
        assert_eq!(outcome.hits, 0);
        assert!(session.obstacles().get(0).is_some_and(|o| o.active));
    }

    #[test]
    fn reset_twice_equals_once() {
        let mut session = Session::new();
        for _ in 0..7 {
            session.tick(&steer(4000), |_| {});
        }
        session.reset();
        let once = session.clone();
        session.reset();
        assert_eq!(session, once);
        assert_eq!(session, Session::new());
    }
}
