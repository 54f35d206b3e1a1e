//! Game tuning and timing.
//!
//! Coordinates are in play-field pixels: a 128×64 monochrome field with the
//! origin at the top-left corner.

/// Play-field width; the player and obstacles move inside `0..TRACK_WIDTH`.
pub const TRACK_WIDTH: i32 = 128;
/// Play-field height.
pub const TRACK_HEIGHT: i32 = 64;

// Platform
pub const PLATFORM_Y: i32 = 56;
pub const PLATFORM_HEIGHT: i32 = 8;

// Player sprite
pub const SPRITE_SIZE: i32 = 8;
pub const PLAYER_START_X: i32 = 60;
/// Resting y of the sprite's top edge.
pub const GROUND_Y: i32 = PLATFORM_Y - SPRITE_SIZE;
/// Rightmost valid sprite x.
pub const MAX_PLAYER_X: i32 = TRACK_WIDTH - SPRITE_SIZE;
pub const STEP_X: i32 = 2;

// Vertical physics, per tick
pub const GRAVITY: i32 = 1;
pub const MAX_FALL_SPEED: i32 = 5;
pub const JUMP_STRENGTH: i32 = 10;

// Obstacles
pub const MAX_OBSTACLES: usize = 4;
pub const OBSTACLE_WIDTH: i32 = 8;
pub const OBSTACLE_HEIGHT: i32 = 8;
pub const OBSTACLE_SPEED: i32 = 2;
/// Horizontal distance between neighbouring slots at spawn.
pub const SPAWN_GAP: i32 = 40;
/// Top edge of every obstacle; they all sit on the platform.
pub const OBSTACLE_Y: i32 = PLATFORM_Y - OBSTACLE_HEIGHT;

// Joystick, 12-bit ADC
pub const AXIS_MAX: u16 = 4095;
pub const AXIS_CENTER: u16 = 2048;
/// Readings above this move the player right.
pub const AXIS_RIGHT_THRESHOLD: u16 = 3000;
/// Readings below this move the player left.
pub const AXIS_LEFT_THRESHOLD: u16 = 1000;

// Timing
pub const TICK_MS: u64 = 50;
pub const ADC_SETTLE_MS: u32 = 2;
/// How long the status LED stays lit after a hit. Blocks the tick.
pub const LED_PULSE_MS: u32 = 200;

/// Integer upscale applied when presenting the play field on the badge LCD.
pub const SCREEN_SCALE: u32 = 2;
