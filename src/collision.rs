//! Player/obstacle overlap.

use crate::{
    config::{
        OBSTACLE_HEIGHT,
        OBSTACLE_WIDTH,
        PLATFORM_Y,
        SPRITE_SIZE,
    },
    obstacles::Obstacle,
    physics::Player,
};

/// True when `player` touches an active `obstacle`.
///
/// Horizontal spans are half-open. The vertical test only asks whether the
/// sprite's bottom edge has dropped below the top of a ground-level
/// obstacle; the obstacle's own y is not consulted.
pub fn check_collision(player: &Player, obstacle: &Obstacle) -> bool {
    obstacle.active
        && player.x < obstacle.x + OBSTACLE_WIDTH
        && player.x + SPRITE_SIZE > obstacle.x
        && player.y + SPRITE_SIZE > PLATFORM_Y - OBSTACLE_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GROUND_Y;

    fn player_at(x: i32, y: i32) -> Player {
        Player {
            x,
            y,
            ..Player::START
        }
    }

    #[test]
    fn overlapping_on_ground() {
        let obstacle = Obstacle { x: 4, active: true };
        assert!(check_collision(&player_at(0, GROUND_Y), &obstacle));
    }

    #[test]
    fn inactive_never_collides() {
        let obstacle = Obstacle {
            x: 4,
            active: false,
        };
        assert!(!check_collision(&player_at(0, GROUND_Y), &obstacle));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let left = Obstacle {
            x: -8,
            active: true,
        };
        let right = Obstacle { x: 8, active: true };
        let player = player_at(0, GROUND_Y);
        assert!(!check_collision(&player, &left));
        assert!(!check_collision(&player, &right));
        assert!(check_collision(&player, &Obstacle { x: 7, active: true }));
        assert!(check_collision(&player, &Obstacle { x: -7, active: true }));
    }

    #[test]
    fn clearing_the_obstacle_by_jumping() {
        let obstacle = Obstacle { x: 0, active: true };
        // Bottom edge exactly on the obstacle's top: no hit.
        assert!(!check_collision(&player_at(0, GROUND_Y - 8), &obstacle));
        assert!(check_collision(&player_at(0, GROUND_Y - 7), &obstacle));
    }
}
