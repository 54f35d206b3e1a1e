//! Board support for the Disobey 2026 badge (ESP32-S3).
//!
//! - **Screen**: 320×170 ST7789 LCD over SPI with DMA, showing the 128×64
//!   play field at 2× scale
//! - **Buttons**: A (restart) and B (jump)
//! - **Joystick**: analog stick on the expansion header, read through ADC1
//! - **LEDs**: 10× WS2812, all flashed together as the status LED
//! - **Backlight**: switched on at boot

mod buttons;
mod display;
mod joystick;
mod leds;

pub use buttons::Buttons;
pub use display::{
    Display,
    Screen,
};
use esp_hal::{
    Blocking,
    assign_resources,
    clock::{
        Clock,
        CpuClock,
    },
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    rmt::{
        Rmt,
        Tx,
        TxChannelConfig,
        TxChannelCreator as _,
    },
    rom,
    time::Rate,
};
pub use joystick::Joystick;
pub use leds::{
    LED_COUNT,
    Leds,
};

/// StaticCell helper — allocates a value into a `static` exactly once.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            dc: GPIO15,
            rst: GPIO7,
            sck: GPIO4,
            cs: GPIO6,
            miso: GPIO16,
            mosi: GPIO5,
            spi: SPI2,
            dma: DMA_CH0,
        },
        backlight: BacklightResources<'d> {
            led: GPIO19,
        },
        buttons: ButtonResources<'d> {
            a: GPIO13,
            b: GPIO38,
        },
        // The stick's vertical-axis output (VRY) is the one wired to the
        // ADC, and it steers the player horizontally.
        joystick: JoystickResources<'d> {
            vry: GPIO10,
            adc: ADC1,
        },
        leds: LedResources<'d> {
            power: GPIO17,
            io: GPIO18,
            rmt: RMT,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Minimal CPU clock switcher for ESP32-S3.
///
/// Steps through an intermediate frequency before reaching the target,
/// which is required by the hardware.
fn set_cpu_clock(cpu_clock_speed: CpuClock) {
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .sysclk_conf()
        .modify(|_, w| unsafe { w.soc_clk_sel().bits(1) });
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .cpu_per_conf()
        .modify(|_, w| unsafe {
            let _ = w.pll_freq_sel().set_bit();
            w.cpuperiod_sel().bits(match cpu_clock_speed {
                CpuClock::_80MHz => 0,
                CpuClock::_160MHz => 1,
                CpuClock::_240MHz => 2,
                _ => panic!("Unsupported CPU clock speed"),
            })
        });

    rom::ets_update_cpu_frequency_rom(cpu_clock_speed.frequency().as_mhz());
}

/// Initialise the badge hardware and return the raw peripheral set.
///
/// Call once at the top of `main`, then break the peripherals up with
/// [`split_resources!`].
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    set_cpu_clock(CpuClock::_160MHz);
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

/// Switch the LCD backlight on. Keep the returned pin alive.
#[must_use]
pub fn backlight_on(res: BacklightResources<'static>) -> Output<'static> {
    Output::new(res.led, Level::High, OutputConfig::default())
}

// ── Resource → peripheral conversions ───────────────────────────────────────

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

impl<'a> From<LedResources<'a>> for esp_hal::rmt::Channel<'a, Blocking, Tx> {
    fn from(res: LedResources<'a>) -> Self {
        let _ws_power = Output::new(res.power, Level::High, OutputConfig::default());
        let rmt = Rmt::new(res.rmt, Rate::from_mhz(40)).unwrap();
        let tx_config = TxChannelConfig::default().with_clk_divider(1);
        rmt.channel0.configure_tx(res.io, tx_config).unwrap()
    }
}

impl<'a> From<LedResources<'a>> for Leds<'a> {
    fn from(res: LedResources<'a>) -> Self {
        Leds::new(res.into())
    }
}
