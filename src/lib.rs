/*
 *  lib.rs
 *
 *  weather-glyphs - LyMonS glyph kit
 *  (c) 2020-26 Stuart Hunter
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

//! Small procedural weather glyphs (sun, cloud, rain, snow, fog, thunder)
//! for framebuffer displays, in a 48px and a 24px size class.
//!
//! ```
//! use embedded_graphics::pixelcolor::Rgb565;
//! use weather_glyphs::{draw_weather_icon_large, VarFrameBuf, WeatherIcon, ili9341};
//!
//! let mut fb = VarFrameBuf::new(64, 64, Rgb565::new(0, 0, 0));
//! draw_weather_icon_large(&mut fb, WeatherIcon::Rain, 0, 0, ili9341::YELLOW).unwrap();
//! assert!(fb.count(ili9341::CYAN) > 0);
//! ```

pub mod config;
pub mod icons;
pub mod palette;
pub mod recorder;
pub mod surface;
pub mod vframebuf;

pub use icons::{
    IconRenderer, IconSize, ParseIconError, WeatherIcon, draw_weather_icon_large,
    draw_weather_icon_small,
};
pub use palette::{GlyphPart, Palette, ili9341};
pub use recorder::{DrawCall, RecorderError, RecordingSurface};
pub use surface::DrawSurface;
pub use vframebuf::VarFrameBuf;
