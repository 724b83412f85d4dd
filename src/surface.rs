/*
 *  surface.rs
 *
 *  weather-glyphs - LyMonS glyph kit
 *  (c) 2020-26 Stuart Hunter
 *
 *  Primitive drawing capability consumed by the glyph renderer
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
    StrokeAlignment,
};

/// Minimal set of pixel primitives a glyph needs from a display.
///
/// Coordinates and sizes are signed pixels. Anything falling outside the
/// surface is the surface's problem; implementations are expected to clip.
/// The error type is whatever the underlying target reports, the glyph code
/// only forwards it.
pub trait DrawSurface {
    /// Colour handed through to the surface untouched
    type Color: Copy;

    /// Error reported by the surface
    type Error;

    /// Filled circle centred on (x, y), `r` pixels from centre to edge
    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Self::Color) -> Result<(), Self::Error>;

    /// 1px line between two points, both ends inclusive
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Self::Color) -> Result<(), Self::Error>;

    /// Single pixel
    fn draw_pixel(&mut self, x: i32, y: i32, color: Self::Color) -> Result<(), Self::Error>;

    /// Filled rectangle with rounded corners of radius `r`
    fn fill_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, r: i32, color: Self::Color) -> Result<(), Self::Error>;

    /// Horizontal run of `w` pixels starting at (x, y)
    fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: Self::Color) -> Result<(), Self::Error>;

    /// 1px outline of the `w` x `h` rectangle anchored at (x, y)
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Self::Color) -> Result<(), Self::Error>;
}

/// Every embedded-graphics target is a glyph surface.
impl<D> DrawSurface for D
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Self::Color) -> Result<(), Self::Error> {
        if r < 0 {
            return Ok(());
        }
        let diameter = r as u32 * 2 + 1;
        Circle::with_center(Point::new(x, y), diameter)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Self::Color) -> Result<(), Self::Error> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(self)
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Self::Color) -> Result<(), Self::Error> {
        Pixel(Point::new(x, y), color).draw(self)
    }

    fn fill_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, r: i32, color: Self::Color) -> Result<(), Self::Error> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        // corners can never exceed half the short side
        let r = r.clamp(0, w.min(h) / 2) as u32;
        let rect = Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32));
        RoundedRectangle::with_equal_corners(rect, Size::new(r, r))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(self)
    }

    fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: Self::Color) -> Result<(), Self::Error> {
        if w <= 0 {
            return Ok(());
        }
        self.draw_line(x, y, x.saturating_add(w - 1), y, color)
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Self::Color) -> Result<(), Self::Error> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        Rectangle::new(Point::new(x, y), Size::new(w as u32, h as u32))
            .into_styled(style)
            .draw(self)
    }
}
