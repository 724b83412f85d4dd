/*
 *  icons.rs
 *
 *  weather-glyphs - LyMonS glyph kit
 *  (c) 2020-26 Stuart Hunter
 *
 *  Procedural weather glyphs, large (48px) and small (24px)
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

//! Weather glyphs drawn from a handful of primitives instead of bitmaps.
//!
//! Both size classes are hand-tuned literal layouts; the small one is not
//! derived from the large one. Shapes are allowed to spill a few pixels past
//! the nominal box (the cloud is 50px wide in a 48px box), the surface clips.

use std::fmt;
use std::str::FromStr;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use thiserror::Error;

use crate::palette::Palette;
use crate::surface::DrawSurface;

/// Which condition to draw. Codes 0..=6 follow declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum WeatherIcon {
    #[default]
    Unknown = 0,
    Sunny = 1,
    Cloudy = 2,
    Rain = 3,
    Snow = 4,
    Fog = 5,
    Thunder = 6,
}

impl WeatherIcon {
    pub const ALL: [WeatherIcon; 7] = [
        WeatherIcon::Unknown,
        WeatherIcon::Sunny,
        WeatherIcon::Cloudy,
        WeatherIcon::Rain,
        WeatherIcon::Snow,
        WeatherIcon::Fog,
        WeatherIcon::Thunder,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            WeatherIcon::Unknown => "unknown",
            WeatherIcon::Sunny => "sunny",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
            WeatherIcon::Fog => "fog",
            WeatherIcon::Thunder => "thunder",
        }
    }
}

/// Any code outside 0..=6 is `Unknown`
impl From<u8> for WeatherIcon {
    fn from(code: u8) -> Self {
        match code {
            1 => WeatherIcon::Sunny,
            2 => WeatherIcon::Cloudy,
            3 => WeatherIcon::Rain,
            4 => WeatherIcon::Snow,
            5 => WeatherIcon::Fog,
            6 => WeatherIcon::Thunder,
            _ => WeatherIcon::Unknown,
        }
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseIconError {
    #[error("unknown weather icon '{0}'")]
    Icon(String),
    #[error("unknown icon size '{0}' (expected large or small)")]
    Size(String),
}

impl FromStr for WeatherIcon {
    type Err = ParseIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        WeatherIcon::ALL
            .into_iter()
            .find(|icon| icon.name() == wanted)
            .ok_or_else(|| ParseIconError::Icon(s.to_string()))
    }
}

/// Size class of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconSize {
    #[default]
    Large,
    Small,
}

impl IconSize {
    /// Side of the nominal square box in pixels
    pub const fn dimension(self) -> u32 {
        match self {
            IconSize::Large => 48,
            IconSize::Small => 24,
        }
    }

    /// Nominal box with its top-left corner at (x, y)
    pub fn bounds(self, x: i32, y: i32) -> Rectangle {
        let d = self.dimension();
        Rectangle::new(Point::new(x, y), Size::new(d, d))
    }

    pub fn name(self) -> &'static str {
        match self {
            IconSize::Large => "large",
            IconSize::Small => "small",
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconSize {
    type Err = ParseIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "large" | "l" => Ok(IconSize::Large),
            "small" | "s" => Ok(IconSize::Small),
            _ => Err(ParseIconError::Size(s.to_string())),
        }
    }
}

/// Stateless glyph renderer.
///
/// Holds only the palette for the fixed-colour parts; the sun takes the base
/// colour passed per call. Every call is an independent, bounded run of
/// primitives on the surface and the first surface error aborts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRenderer<C> {
    palette: Palette<C>,
}

impl<C: Copy> IconRenderer<C> {
    pub const fn new(palette: Palette<C>) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette<C> {
        &self.palette
    }

    pub fn draw<S>(
        &self,
        surface: &mut S,
        icon: WeatherIcon,
        size: IconSize,
        x: i32,
        y: i32,
        base_color: C,
    ) -> Result<(), S::Error>
    where
        S: DrawSurface<Color = C> + ?Sized,
    {
        match size {
            IconSize::Large => self.draw_large(surface, icon, x, y, base_color),
            IconSize::Small => self.draw_small(surface, icon, x, y, base_color),
        }
    }

    /// Glyph in the 48x48 box at (x, y).
    ///
    /// Rain puts 5 drops at x+10, step 8; snow 4 flakes at x+12, step 9;
    /// fog is 4 lines from y+14, step 6. Unknown is a 32px box with a cross.
    pub fn draw_large<S>(
        &self,
        surface: &mut S,
        icon: WeatherIcon,
        x: i32,
        y: i32,
        base_color: C,
    ) -> Result<(), S::Error>
    where
        S: DrawSurface<Color = C> + ?Sized,
    {
        let p = &self.palette;
        match icon {
            WeatherIcon::Sunny => sun(surface, at(x, 20), at(y, 20), 12, base_color),
            WeatherIcon::Cloudy => cloud(surface, at(x, 2), at(y, 18), 50, 20, p.cloud),
            WeatherIcon::Rain => {
                cloud(surface, at(x, 2), at(y, 12), 50, 20, p.cloud)?;
                for i in 0..5 {
                    raindrop(surface, at(x, 10 + i * 8), at(y, 36), p.raindrop)?;
                }
                Ok(())
            }
            WeatherIcon::Snow => {
                cloud(surface, at(x, 2), at(y, 12), 50, 20, p.cloud)?;
                for i in 0..4 {
                    snowflake(surface, at(x, 12 + i * 9), at(y, 36), p.snowflake)?;
                }
                Ok(())
            }
            WeatherIcon::Fog => {
                for i in 0..4 {
                    surface.draw_fast_hline(x, at(y, 14 + i * 6), 52, p.fog)?;
                }
                Ok(())
            }
            WeatherIcon::Thunder => {
                cloud(surface, at(x, 2), at(y, 12), 50, 20, p.cloud)?;
                bolt(surface, at(x, 36), at(y, 30), p.bolt)
            }
            WeatherIcon::Unknown => {
                surface.draw_rect(at(x, 8), at(y, 8), 32, 32, p.outline)?;
                surface.draw_line(at(x, 8), at(y, 8), at(x, 40), at(y, 40), p.outline)?;
                surface.draw_line(at(x, 40), at(y, 8), at(x, 8), at(y, 40), p.outline)
            }
        }
    }

    /// Glyph in the 24x24 box at (x, y).
    ///
    /// Rain and snow both put 3 marks at x+6, step 7; fog is 3 lines from
    /// y+8, step 5. Unknown is a bare 20px box.
    pub fn draw_small<S>(
        &self,
        surface: &mut S,
        icon: WeatherIcon,
        x: i32,
        y: i32,
        base_color: C,
    ) -> Result<(), S::Error>
    where
        S: DrawSurface<Color = C> + ?Sized,
    {
        let p = &self.palette;
        match icon {
            WeatherIcon::Sunny => sun(surface, at(x, 10), at(y, 10), 6, base_color),
            WeatherIcon::Cloudy => cloud(surface, x, at(y, 8), 28, 12, p.cloud),
            WeatherIcon::Rain => {
                cloud(surface, x, at(y, 4), 28, 12, p.cloud)?;
                for i in 0..3 {
                    raindrop(surface, at(x, 6 + i * 7), at(y, 20), p.raindrop)?;
                }
                Ok(())
            }
            WeatherIcon::Snow => {
                cloud(surface, x, at(y, 4), 28, 12, p.cloud)?;
                for i in 0..3 {
                    snowflake(surface, at(x, 6 + i * 7), at(y, 20), p.snowflake)?;
                }
                Ok(())
            }
            WeatherIcon::Fog => {
                for i in 0..3 {
                    surface.draw_fast_hline(x, at(y, 8 + i * 5), 28, p.fog)?;
                }
                Ok(())
            }
            WeatherIcon::Thunder => {
                cloud(surface, x, at(y, 4), 28, 12, p.cloud)?;
                bolt(surface, at(x, 20), at(y, 18), p.bolt)
            }
            WeatherIcon::Unknown => surface.draw_rect(at(x, 2), at(y, 2), 20, 20, p.outline),
        }
    }
}

impl Default for IconRenderer<Rgb565> {
    fn default() -> Self {
        Self::new(Palette::ili9341())
    }
}

/// Large glyph on an RGB565 surface with the stock TFT palette
pub fn draw_weather_icon_large<S>(
    surface: &mut S,
    icon: WeatherIcon,
    x: i32,
    y: i32,
    base_color: Rgb565,
) -> Result<(), S::Error>
where
    S: DrawSurface<Color = Rgb565> + ?Sized,
{
    IconRenderer::<Rgb565>::default().draw_large(surface, icon, x, y, base_color)
}

/// Small glyph on an RGB565 surface with the stock TFT palette
pub fn draw_weather_icon_small<S>(
    surface: &mut S,
    icon: WeatherIcon,
    x: i32,
    y: i32,
    base_color: Rgb565,
) -> Result<(), S::Error>
where
    S: DrawSurface<Color = Rgb565> + ?Sized,
{
    IconRenderer::<Rgb565>::default().draw_small(surface, icon, x, y, base_color)
}

// ---------- shapes ----------

/// Anchor plus offset. Saturates so an anchor at the far end of the i32 range
/// pins the part to that edge; clipping it is up to the surface.
#[inline]
fn at(v: i32, d: i32) -> i32 {
    v.saturating_add(d)
}

/// Disc of radius `r` plus 8 rays from r+2 to r+10, one every 45 degrees
/// starting at +x and turning clockwise on screen.
fn sun<S>(s: &mut S, x: i32, y: i32, r: i32, color: S::Color) -> Result<(), S::Error>
where
    S: DrawSurface + ?Sized,
{
    s.fill_circle(x, y, r, color)?;
    for i in 0..8 {
        let a = i as f32 * core::f32::consts::FRAC_PI_4;
        let (sin, cos) = a.sin_cos();
        let inner = (r + 2) as f32;
        let outer = (r + 10) as f32;
        s.draw_line(
            at(x, (cos * inner).round() as i32),
            at(y, (sin * inner).round() as i32),
            at(x, (cos * outer).round() as i32),
            at(y, (sin * outer).round() as i32),
            color,
        )?;
    }
    Ok(())
}

/// Rounded slab with three puffs along its top edge
fn cloud<S>(s: &mut S, x: i32, y: i32, w: i32, h: i32, color: S::Color) -> Result<(), S::Error>
where
    S: DrawSurface + ?Sized,
{
    let r = h / 2;
    s.fill_round_rect(x, y, w, h, r / 2, color)?;
    s.fill_circle(at(x, r), y, r, color)?;
    // middle puff sits higher and a touch smaller
    s.fill_circle(at(x, w / 2), at(y, -r / 3), r * 9 / 10, color)?;
    s.fill_circle(at(x, w - r), y, r, color)
}

/// "V" with its point at (x, y) opening downwards, plus a dot below
fn raindrop<S>(s: &mut S, x: i32, y: i32, color: S::Color) -> Result<(), S::Error>
where
    S: DrawSurface + ?Sized,
{
    s.draw_line(x, y, at(x, -2), at(y, 6), color)?;
    s.draw_line(x, y, at(x, 2), at(y, 6), color)?;
    s.draw_pixel(x, at(y, 7), color)
}

/// Four strokes crossing at (x, y)
fn snowflake<S>(s: &mut S, x: i32, y: i32, color: S::Color) -> Result<(), S::Error>
where
    S: DrawSurface + ?Sized,
{
    s.draw_line(at(x, -4), y, at(x, 4), y, color)?;
    s.draw_line(x, at(y, -4), x, at(y, 4), color)?;
    s.draw_line(at(x, -3), at(y, -3), at(x, 3), at(y, 3), color)?;
    s.draw_line(at(x, -3), at(y, 3), at(x, 3), at(y, -3), color)
}

/// Jagged Z hanging down-left from (x, y)
fn bolt<S>(s: &mut S, x: i32, y: i32, color: S::Color) -> Result<(), S::Error>
where
    S: DrawSurface + ?Sized,
{
    s.draw_line(x, y, at(x, -8), at(y, 10), color)?;
    s.draw_line(at(x, -8), at(y, 10), at(x, -2), at(y, 10), color)?;
    s.draw_line(at(x, -2), at(y, 10), at(x, -10), at(y, 22), color)
}
