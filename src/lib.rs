//! # badge-jumper
//!
//! A small endless-runner for the Disobey 2026 badge: a square hops over
//! obstacles scrolling along a 128×64 monochrome play field.
//!
//! - The joystick's analog axis steers left and right
//! - Button B jumps, button A restarts the session
//! - The status LED flashes whenever an obstacle is knocked out
//! - An obstacle scrolling off the left edge ends the round
//!
//! The game core is hardware-agnostic and builds on the host:
//! inputs are `embedded-hal` pins, the screen is any `embedded-graphics`
//! [`DrawTarget`](embedded_graphics::draw_target::DrawTarget) with
//! [`BinaryColor`](embedded_graphics::pixelcolor::BinaryColor). Board
//! support for the badge lives behind the `badge` feature.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = badge_jumper::board::init();
//! let resources = badge_jumper::split_resources!(peripherals);
//!
//! let controls = Controls::new(
//!     Joystick::from(resources.joystick),
//!     buttons.a,
//!     buttons.b,
//! );
//! let mut game = Game::new(controls, leds, screen, Delay::new())?;
//! loop {
//!     game.tick()?;
//!     Timer::after_millis(config::TICK_MS).await;
//! }
//! ```

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible in every module.
mod fmt;

pub mod collision;
pub mod config;
pub mod feedback;
pub mod framebuffer;
pub mod game;
pub mod input;
pub mod obstacles;
pub mod physics;
pub mod render;
pub mod session;

#[cfg(feature = "badge")]
pub mod board;

pub use collision::check_collision;
pub use feedback::{
    PinLed,
    StatusLed,
};
pub use framebuffer::Framebuffer;
pub use game::Game;
pub use input::{
    AnalogAxis,
    Button,
    Controls,
    InputFrame,
    Steer,
};
pub use obstacles::{
    Obstacle,
    Obstacles,
};
pub use physics::Player;
pub use render::{
    Panel,
    draw_scene,
    render,
};
pub use session::{
    ResetCause,
    Session,
    TickOutcome,
};
