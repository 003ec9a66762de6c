use super::{HEIGHT, PAGES, WIDTH};
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};
use std::convert::Infallible;

/// A 1 bit per pixel frame, laid out page-major as the controller
/// expects: byte `page * WIDTH + x`, bit `y % 8`.
pub struct Framebuffer {
    buffer: [u8; WIDTH as usize * PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            buffer: [0; WIDTH as usize * PAGES],
        }
    }

    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Sets a single pixel; coordinates outside the panel are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }

        let index = (y as usize / 8) * WIDTH as usize + x as usize;
        let bit = 1 << (y % 8);
        if on {
            self.buffer[index] |= bit;
        } else {
            self.buffer[index] &= !bit;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> bool {
        assert!(x < WIDTH && y < HEIGHT);
        let index = (y as usize / 8) * WIDTH as usize + x as usize;
        self.buffer[index] & (1 << (y % 8)) != 0
    }

    /// One page of column bytes, ready to stream to the controller.
    pub(crate) fn page(&self, page: usize) -> &[u8] {
        assert!(page < PAGES);
        &self.buffer[page * WIDTH as usize..(page + 1) * WIDTH as usize]
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
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color.is_on());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        geometry::Point,
        primitives::{Primitive, PrimitiveStyle, Rectangle},
        Drawable,
    };

    #[test]
    fn pixels_are_page_major() {
        let mut frame = Framebuffer::new();

        frame.set_pixel(0, 0, true);
        assert_eq!(frame.page(0)[0], 0b0000_0001);

        frame.set_pixel(5, 11, true);
        assert_eq!(frame.page(1)[5], 0b0000_1000);

        frame.set_pixel(5, 11, false);
        assert_eq!(frame.page(1)[5], 0);
    }

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut frame = Framebuffer::new();
        frame.set_pixel(WIDTH, 0, true);
        frame.set_pixel(0, HEIGHT, true);

        for page in 0..PAGES {
            assert!(frame.page(page).iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn draws_embedded_graphics_primitives() {
        let mut frame = Framebuffer::new();

        Rectangle::new(Point::new(0, 0), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut frame)
            .unwrap();

        assert!(frame.pixel(0, 0));
        assert!(frame.pixel(3, 0));
        assert!(frame.pixel(0, 3));
        assert!(!frame.pixel(1, 1));
    }

    #[test]
    fn clear_resets_every_page() {
        let mut frame = Framebuffer::new();
        frame.set_pixel(10, 20, true);
        frame.clear();
        assert!(!frame.pixel(10, 20));
    }
}
