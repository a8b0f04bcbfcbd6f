//! `embedded-graphics` adapter
//!
//! Implements [`DisplayBackend`] for any RGB565 draw target, which covers
//! the `mipidsi` panel drivers as well as in-memory framebuffers.

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};

use crate::backend::{Color, DisplayBackend, DisplayError, TextSize};

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Rgb565::BLACK,
            Color::White => Rgb565::WHITE,
            Color::Cyan => Rgb565::CYAN,
            Color::Yellow => Rgb565::YELLOW,
            Color::Green => Rgb565::GREEN,
            Color::Blue => Rgb565::BLUE,
            Color::Magenta => Rgb565::MAGENTA,
        }
    }
}

impl TextSize {
    /// Monospace font used for this face
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_6X10,
            TextSize::Large => &FONT_10X20,
        }
    }
}

/// Drawing backend over an `embedded-graphics` draw target
pub struct GraphicsBackend<D> {
    target: D,
}

impl<D> GraphicsBackend<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Get access to the underlying draw target
    pub fn target(&self) -> &D {
        &self.target
    }
}

fn point(x: u16, y: u16) -> Point {
    Point::new(i32::from(x), i32::from(y))
}

impl<D> DisplayBackend for GraphicsBackend<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn clear(&mut self, color: Color) -> Result<(), DisplayError> {
        self.target
            .clear(color.into())
            .map_err(|_| DisplayError::Communication)
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        Rectangle::new(point(x, y), Size::new(u32::from(width), u32::from(height)))
            .into_styled(PrimitiveStyle::with_fill(color.into()))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_hline(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        if length == 0 {
            return Ok(());
        }

        let end = Point::new(i32::from(x) + i32::from(length) - 1, i32::from(y));
        Line::new(point(x, y), end)
            .into_styled(PrimitiveStyle::with_stroke(color.into(), 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        size: TextSize,
        color: Color,
    ) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(size.font(), color.into());
        Text::with_baseline(text, point(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        // Panel drivers write straight to display RAM
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    const WIDTH: usize = 240;
    const HEIGHT: usize = 135;

    // In-memory RGB565 framebuffer
    struct FrameBuffer {
        pixels: Vec<Rgb565>,
    }

    impl FrameBuffer {
        fn new() -> Self {
            Self {
                pixels: vec![Rgb565::BLACK; WIDTH * HEIGHT],
            }
        }

        fn pixel(&self, x: usize, y: usize) -> Rgb565 {
            self.pixels[y * WIDTH + x]
        }

        fn count(&self, color: Rgb565) -> usize {
            self.pixels.iter().filter(|&&p| p == color).count()
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            Size::new(WIDTH as u32, HEIGHT as u32)
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if p.x >= 0 && p.y >= 0 && (p.x as usize) < WIDTH && (p.y as usize) < HEIGHT {
                    self.pixels[p.y as usize * WIDTH + p.x as usize] = color;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_clear_fills_surface() {
        let mut backend = GraphicsBackend::new(FrameBuffer::new());
        backend.clear(Color::Blue).unwrap();
        assert_eq!(backend.target().count(Rgb565::BLUE), WIDTH * HEIGHT);
    }

    #[test]
    fn test_hline_spans_requested_length() {
        let mut backend = GraphicsBackend::new(FrameBuffer::new());
        backend.draw_hline(0, 20, 240, Color::White).unwrap();

        let fb = backend.target();
        assert_eq!(fb.count(Rgb565::WHITE), 240);
        assert_eq!(fb.pixel(0, 20), Rgb565::WHITE);
        assert_eq!(fb.pixel(239, 20), Rgb565::WHITE);
        assert_eq!(fb.pixel(0, 21), Rgb565::BLACK);
    }

    #[test]
    fn test_zero_length_hline_draws_nothing() {
        let mut backend = GraphicsBackend::new(FrameBuffer::new());
        backend.draw_hline(10, 10, 0, Color::White).unwrap();
        assert_eq!(backend.target().count(Rgb565::WHITE), 0);
    }

    #[test]
    fn test_fill_rect_area() {
        let mut backend = GraphicsBackend::new(FrameBuffer::new());
        backend.fill_rect(10, 10, 20, 5, Color::Green).unwrap();
        assert_eq!(backend.target().count(Rgb565::GREEN), 100);
        assert_eq!(backend.target().pixel(10, 10), Rgb565::GREEN);
        assert_eq!(backend.target().pixel(30, 10), Rgb565::BLACK);
    }

    #[test]
    fn test_text_drawn_below_top_left_corner() {
        let mut backend = GraphicsBackend::new(FrameBuffer::new());
        backend
            .draw_text(5, 40, "Unread: 3", TextSize::Large, Color::White)
            .unwrap();

        let fb = backend.target();
        assert!(fb.count(Rgb565::WHITE) > 0);
        // Nothing above the text origin
        for y in 0..40 {
            for x in 0..WIDTH {
                assert_eq!(fb.pixel(x, y), Rgb565::BLACK);
            }
        }
    }

    #[test]
    fn test_overflowing_text_is_clipped() {
        let mut backend = GraphicsBackend::new(FrameBuffer::new());
        let long = "A subject line that is far too long to fit on a 240 pixel wide panel";
        assert!(backend
            .draw_text(5, 78, long, TextSize::Small, Color::Cyan)
            .is_ok());
    }

    #[test]
    fn test_faces_differ_in_height() {
        assert!(
            TextSize::Large.font().character_size.height
                > TextSize::Small.font().character_size.height
        );
    }
}
