//! Jumper firmware for the Disobey 2026 badge.
//!
//! - Joystick steers the square left and right
//! - B jumps, A restarts the session
//! - LEDs flash red when an obstacle is hit
//! - An obstacle slipping off the left edge ends the round and starts over

#![no_std]
#![no_main]

use badge_jumper::{
    Controls,
    Game,
    board::{
        self,
        Buttons,
        Display,
        Joystick,
        Leds,
        Screen,
    },
    config::TICK_MS,
    mk_static,
};
use defmt::{
    debug,
    error,
    info,
};
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::{
    delay::Delay,
    gpio::{
        Input,
        Output,
    },
    timer::timg::TimerGroup,
};
use esp_println as _;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

type BadgeGame = Game<Joystick<'static>, Input<'static>, Input<'static>, Leds<'static>, Screen<'static>, Delay>;

#[embassy_executor::task]
async fn game_task(game: &'static mut BadgeGame, _backlight: &'static mut Output<'static>) {
    info!("Jumper game task started");
    let tick = Duration::from_millis(TICK_MS);

    loop {
        match game.tick() {
            Ok(outcome) if outcome != Default::default() => debug!("{}", outcome),
            Ok(_) => {}
            Err(e) => error!("display flush failed: {}", defmt::Debug2Format(&e)),
        }

        Timer::after(tick).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = board::init();
    let resources = badge_jumper::split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let backlight = mk_static!(Output<'static>, board::backlight_on(resources.backlight));
    let display: Display<'static> = resources.display.into();
    let screen = Screen::new(display).unwrap();
    let buttons: Buttons = resources.buttons.into();
    let leds: Leds<'static> = resources.leds.into();
    let controls = Controls::new(Joystick::from(resources.joystick), buttons.a, buttons.b);

    let game = mk_static!(
        BadgeGame,
        Game::new(controls, leds, screen, Delay::new()).unwrap()
    );

    spawner.must_spawn(game_task(game, backlight));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
