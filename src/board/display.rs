//! ST7789 display driver — 320×170 LCD over SPI with DMA.
//!
//! The game draws into a 128×64 [`Framebuffer`]; [`Screen`] shows it
//! centred on the LCD at [`SCREEN_SCALE`]× with white pixels on black.

use embedded_graphics::{
    pixelcolor::{
        BinaryColor,
        Rgb565,
    },
    prelude::*,
};
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Async,
    dma::{
        DmaRxBuf,
        DmaTxBuf,
    },
    dma_buffers,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};

use crate::{
    board::DisplayResources,
    config::SCREEN_SCALE,
    framebuffer::{
        self,
        Framebuffer,
    },
    render::Panel,
};

const LCD_WIDTH: u32 = 320;
const LCD_HEIGHT: u32 = 170;

/// Top-left corner of the scaled play field.
const ORIGIN: Point = Point::new(
    ((LCD_WIDTH - framebuffer::WIDTH * SCREEN_SCALE) / 2) as i32,
    ((LCD_HEIGHT - framebuffer::HEIGHT * SCREEN_SCALE) / 2) as i32,
);

type SpiInterface<'a> = mipidsi::interface::SpiInterface<
    'a,
    ExclusiveDevice<esp_hal::spi::master::SpiDmaBus<'a, Async>, Output<'a>, esp_hal::delay::Delay>,
    Output<'a>,
>;

/// The badge's ST7789 display.
pub type Display<'a> = mipidsi::Display<SpiInterface<'a>, mipidsi::models::ST7789, Output<'a>>;

impl<'a> From<DisplayResources<'a>> for Display<'a> {
    fn from(res: DisplayResources<'a>) -> Self {
        let (rx_buffer, rx_descriptors, tx_buffer, tx_descriptors) = dma_buffers!(32000);
        let dma_rx_buf = DmaRxBuf::new(rx_descriptors, rx_buffer).unwrap();
        let dma_tx_buf = DmaTxBuf::new(tx_descriptors, tx_buffer).unwrap();

        let mut delay = esp_hal::delay::Delay::new();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let mut rst = Output::new(res.rst, Level::Low, OutputConfig::default());
        rst.set_high();

        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default().with_frequency(Rate::from_mhz(80)),
        )
        .unwrap()
        .with_sck(res.sck)
        .with_mosi(res.mosi)
        .with_miso(res.miso)
        .with_dma(res.dma)
        .with_buffers(dma_rx_buf, dma_tx_buf)
        .into_async();

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).unwrap();

        let buffer = crate::mk_static!([u8; 32000], [0_u8; 32000]);
        let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);

        mipidsi::Builder::new(mipidsi::models::ST7789, di)
            .reset_pin(rst)
            .display_size(170, 320)
            .invert_colors(mipidsi::options::ColorInversion::Inverted)
            .orientation(
                mipidsi::options::Orientation::new().rotate(mipidsi::options::Rotation::Deg90),
            )
            .display_offset(35, 0)
            .init(&mut delay)
            .unwrap()
    }
}

/// Monochrome play field presented on the LCD.
pub struct Screen<'a> {
    display: Display<'a>,
    frame: Framebuffer,
}

impl<'a> Screen<'a> {
    /// Paints the whole LCD black once; later flushes only cover the play field.
    pub fn new(mut display: Display<'a>) -> Result<Self, <Display<'a> as DrawTarget>::Error> {
        display.clear(Rgb565::BLACK)?;
        Ok(Self {
            display,
            frame: Framebuffer::new(),
        })
    }

    pub const fn frame(&self) -> &Framebuffer {
        &self.frame
    }
}

impl OriginDimensions for Screen<'_> {
    fn size(&self) -> Size {
        self.frame.size()
    }
}

impl<'a> DrawTarget for Screen<'a> {
    type Color = BinaryColor;
    type Error = <Display<'a> as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let Ok(()) = self.frame.draw_iter(pixels);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let Ok(()) = self.frame.clear(color);
        Ok(())
    }
}

impl Panel for Screen<'_> {
    fn flush(&mut self) -> Result<(), Self::Error> {
        self.frame.present(
            &mut self.display,
            ORIGIN,
            SCREEN_SCALE,
            Rgb565::WHITE,
            Rgb565::BLACK,
        )
    }
}
