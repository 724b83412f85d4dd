/*
 *  palette.rs
 *
 *  weather-glyphs - LyMonS glyph kit
 *  (c) 2020-26 Stuart Hunter
 *
 *  Fixed glyph colours, swappable as one table
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

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// ILI9341 565 colour constants, as the TFT library names them
pub mod ili9341 {
    use super::*;

    pub const BLACK: Rgb565 = rgb565(0x0000);
    pub const LIGHTGREY: Rgb565 = rgb565(0xC618);
    pub const DARKGREY: Rgb565 = rgb565(0x7BEF);
    pub const CYAN: Rgb565 = rgb565(0x07FF);
    pub const WHITE: Rgb565 = rgb565(0xFFFF);
    pub const YELLOW: Rgb565 = rgb565(0xFFE0);
    pub const ORANGE: Rgb565 = rgb565(0xFD20);
    pub const RED: Rgb565 = rgb565(0xF800);
    pub const GREEN: Rgb565 = rgb565(0x07E0);
    pub const BLUE: Rgb565 = rgb565(0x001F);

    const fn rgb565(raw: u16) -> Rgb565 {
        Rgb565::new(
            ((raw >> 11) & 0x1F) as u8,
            ((raw >> 5) & 0x3F) as u8,
            (raw & 0x1F) as u8,
        )
    }
}

/// Parts of a glyph that are drawn in a fixed colour.
///
/// The sun is deliberately absent: it always takes the caller's base colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphPart {
    Cloud,
    Raindrop,
    Snowflake,
    Bolt,
    Fog,
    /// Box and cross of the unknown glyph
    Outline,
}

impl GlyphPart {
    pub const ALL: [GlyphPart; 6] = [
        GlyphPart::Cloud,
        GlyphPart::Raindrop,
        GlyphPart::Snowflake,
        GlyphPart::Bolt,
        GlyphPart::Fog,
        GlyphPart::Outline,
    ];
}

/// Colour table `GlyphPart -> C` handed to the renderer at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C> {
    pub cloud: C,
    pub raindrop: C,
    pub snowflake: C,
    pub bolt: C,
    pub fog: C,
    pub outline: C,
}

impl<C: Copy> Palette<C> {
    /// Same colour for every part, handy on monochrome panels
    pub const fn uniform(color: C) -> Self {
        Self {
            cloud: color,
            raindrop: color,
            snowflake: color,
            bolt: color,
            fog: color,
            outline: color,
        }
    }

    pub fn color(&self, part: GlyphPart) -> C {
        match part {
            GlyphPart::Cloud => self.cloud,
            GlyphPart::Raindrop => self.raindrop,
            GlyphPart::Snowflake => self.snowflake,
            GlyphPart::Bolt => self.bolt,
            GlyphPart::Fog => self.fog,
            GlyphPart::Outline => self.outline,
        }
    }

    /// Copy of this palette with one entry replaced
    pub fn with(mut self, part: GlyphPart, color: C) -> Self {
        let slot = match part {
            GlyphPart::Cloud => &mut self.cloud,
            GlyphPart::Raindrop => &mut self.raindrop,
            GlyphPart::Snowflake => &mut self.snowflake,
            GlyphPart::Bolt => &mut self.bolt,
            GlyphPart::Fog => &mut self.fog,
            GlyphPart::Outline => &mut self.outline,
        };
        *slot = color;
        self
    }
}

impl Palette<Rgb565> {
    /// Stock TFT look: grey clouds and fog, cyan rain, white snow, yellow bolt
    pub const fn ili9341() -> Self {
        Self {
            cloud: ili9341::LIGHTGREY,
            raindrop: ili9341::CYAN,
            snowflake: ili9341::WHITE,
            bolt: ili9341::YELLOW,
            fog: ili9341::LIGHTGREY,
            outline: ili9341::WHITE,
        }
    }
}

impl Default for Palette<Rgb565> {
    fn default() -> Self {
        Self::ili9341()
    }
}

/// Raw 565 value, mostly for logging
pub fn rgb565_raw(color: Rgb565) -> u16 {
    color.into_storage()
}
