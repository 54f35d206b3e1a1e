//! 1-bit play-field framebuffer.
//!
//! Pixels are packed the way monochrome OLED controllers store them: one
//! byte covers eight vertically stacked pixels of a 128-pixel page row.
//! Drawing only touches RAM; [`Framebuffer::present`] streams the whole
//! field to a real panel.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
};

use crate::config::{
    TRACK_HEIGHT,
    TRACK_WIDTH,
};

pub const WIDTH: u32 = TRACK_WIDTH as u32;
pub const HEIGHT: u32 = TRACK_HEIGHT as u32;
const PAGES: usize = HEIGHT as usize / 8;

pub struct Framebuffer {
    buf: [u8; WIDTH as usize * PAGES],
}

impl Framebuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0; WIDTH as usize * PAGES],
        }
    }

    fn index(x: i32, y: i32) -> Option<(usize, u8)> {
        if !(0..TRACK_WIDTH).contains(&x) || !(0..TRACK_HEIGHT).contains(&y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((x + (y / 8) * WIDTH as usize, 1 << (y % 8)))
    }

    /// Lit state of one pixel. Off-screen points read as off.
    pub fn pixel(&self, point: Point) -> bool {
        Self::index(point.x, point.y).is_some_and(|(i, bit)| self.buf[i] & bit != 0)
    }

    /// Off-screen points are clipped.
    pub fn set_pixel(&mut self, point: Point, on: bool) {
        if let Some((i, bit)) = Self::index(point.x, point.y) {
            if on {
                self.buf[i] |= bit;
            } else {
                self.buf[i] &= !bit;
            }
        }
    }

    pub fn lit_count(&self) -> u32 {
        self.buf.iter().map(|b| b.count_ones()).sum()
    }

    /// Raw page-ordered bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Stream the frame to `target`, each pixel blown up to a
    /// `scale`×`scale` block with its top-left corner at `origin`.
    pub fn present<D>(
        &self,
        target: &mut D,
        origin: Point,
        scale: u32,
        on: D::Color,
        off: D::Color,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget,
    {
        let scale = scale.max(1);
        let area = Rectangle::new(origin, Size::new(WIDTH * scale, HEIGHT * scale));
        let colors = (0..HEIGHT * scale).flat_map(move |sy| {
            (0..WIDTH * scale).map(move |sx| {
                let point = Point::new((sx / scale) as i32, (sy / scale) as i32);
                if self.pixel(point) { on } else { off }
            })
        });
        target.fill_contiguous(&area, colors)
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buf.fill(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::Rgb565;

    use super::*;

    /// Records a single `fill_contiguous` call.
    struct Capture {
        area: Rectangle,
        lit: u32,
        first_row: [bool; 4],
    }

    impl OriginDimensions for Capture {
        fn size(&self) -> Size {
            Size::new(320, 170)
        }
    }

    impl DrawTarget for Capture {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Ok(())
        }

        fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Self::Color>,
        {
            self.area = *area;
            for (i, color) in colors.into_iter().enumerate() {
                let on = color == Rgb565::WHITE;
                if on {
                    self.lit += 1;
                }
                if i < self.first_row.len() {
                    self.first_row[i] = on;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn page_packing() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(Point::new(3, 9), true);
        assert_eq!(fb.as_bytes()[WIDTH as usize + 3], 0b10);
        assert!(fb.pixel(Point::new(3, 9)));
        fb.set_pixel(Point::new(3, 9), false);
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn clips_off_screen() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(Point::new(-1, 0), true);
        fb.set_pixel(Point::new(128, 0), true);
        fb.set_pixel(Point::new(0, 64), true);
        assert_eq!(fb.lit_count(), 0);
        assert!(!fb.pixel(Point::new(-1, 0)));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut fb = Framebuffer::new();
        fb.clear(BinaryColor::On).unwrap();
        assert_eq!(fb.lit_count(), WIDTH * HEIGHT);
        fb.clear(BinaryColor::Off).unwrap();
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn present_scales_pixels() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(Point::new(0, 0), true);
        fb.set_pixel(Point::new(127, 63), true);

        let mut capture = Capture {
            area: Rectangle::zero(),
            lit: 0,
            first_row: [false; 4],
        };
        fb.present(&mut capture, Point::new(32, 21), 2, Rgb565::WHITE, Rgb565::BLACK)
            .unwrap();

        assert_eq!(
            capture.area,
            Rectangle::new(Point::new(32, 21), Size::new(256, 128))
        );
        assert_eq!(capture.lit, 8);
        assert_eq!(capture.first_row, [true, true, false, false]);
    }
}
