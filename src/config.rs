/*
 *  config.rs
 *
 *  weather-glyphs - LyMonS glyph kit
 *  (c) 2020-26 Stuart Hunter
 *
 *  YAML + CLI configuration for the palette and the preview tool
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

use std::{fs, path::{Path, PathBuf}};

use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons::{IconSize, ParseIconError, WeatherIcon};
use crate::palette::{GlyphPart, Palette, ili9341};

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Bad colour '{0}' (use #RRGGBB or a colour name)")]
    Color(String),
    #[error(transparent)]
    Icon(#[from] ParseIconError),
}

pub const MAX_SCALE: u32 = 16;

/// Top-level configuration; every field optional so layers can be merged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,     // e.g., "info" | "debug"
    pub palette: Option<PaletteConfig>,
    pub preview: Option<PreviewConfig>,
    /// File the YAML layer came from, set by [`load`]
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Per-part colour overrides, `#RRGGBB` or a name
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaletteConfig {
    pub cloud: Option<String>,
    pub raindrop: Option<String>,
    pub snowflake: Option<String>,
    pub bolt: Option<String>,
    pub fog: Option<String>,
    pub outline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreviewConfig {
    pub icon: Option<String>,
    pub size: Option<String>,
    pub base_color: Option<String>,
    pub scale: Option<u32>,
    pub output: Option<PathBuf>,
}

/// Preview settings after parsing and defaulting
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSettings {
    pub icon: WeatherIcon,
    pub size: IconSize,
    pub base_color: Rgb565,
    pub scale: u32,
    pub output: PathBuf,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "weather-glyphs", about = "Render a weather glyph to a PPM preview")]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// unknown|sunny|cloudy|rain|snow|fog|thunder
    #[arg(long)]
    pub icon: Option<String>,
    /// large|small
    #[arg(long)]
    pub size: Option<String>,
    /// sun colour, #RRGGBB or a name
    #[arg(long)]
    pub base_color: Option<String>,
    /// integer upscale of the written image
    #[arg(long)]
    pub scale: Option<u32>,
    #[arg(long, short, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Defaults, then YAML, then CLI overrides, then validation.
pub fn load(cli: &Cli) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    let path = match cli.config.as_ref() {
        Some(p) if p.exists() => Some(p.clone()),
        Some(p) => {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
        None => find_config_file(),
    };
    if let Some(p) = path {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
        cfg.source = Some(p);
    }

    apply_cli_overrides(&mut cfg, cli);
    validate(&cfg)?;

    Ok(cfg)
}

fn find_config_file() -> Option<PathBuf> {
    find_config_in(home_dir().as_deref(), Path::new(""))
}

/// Try common locations under `home` then `cwd`, in order (first hit wins).
fn find_config_in(home: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(home) = home {
        let p = home.join(".config/weather-glyphs/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/weather-glyphs.yaml");
        if p.exists() { return Some(p) }
    }
    for candidate in &["weather-glyphs.yaml", "config/weather-glyphs.yaml"] {
        let p = cwd.join(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

pub fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_yaml(&s)
}

pub fn parse_yaml(s: &str) -> Result<Config, ConfigError> {
    let cfg: Config = serde_yaml::from_str(s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
pub fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some() { dst.log_level = src.log_level; }
    match (&mut dst.palette, src.palette) {
        (None, Some(p)) => dst.palette = Some(p),
        (Some(d), Some(s)) => merge_palette(d, s),
        _ => {}
    }
    match (&mut dst.preview, src.preview) {
        (None, Some(p)) => dst.preview = Some(p),
        (Some(d), Some(s)) => merge_preview(d, s),
        _ => {}
    }
}

fn merge_palette(dst: &mut PaletteConfig, src: PaletteConfig) {
    if src.cloud.is_some()     { dst.cloud = src.cloud; }
    if src.raindrop.is_some()  { dst.raindrop = src.raindrop; }
    if src.snowflake.is_some() { dst.snowflake = src.snowflake; }
    if src.bolt.is_some()      { dst.bolt = src.bolt; }
    if src.fog.is_some()       { dst.fog = src.fog; }
    if src.outline.is_some()   { dst.outline = src.outline; }
}

fn merge_preview(dst: &mut PreviewConfig, src: PreviewConfig) {
    if src.icon.is_some()       { dst.icon = src.icon; }
    if src.size.is_some()       { dst.size = src.size; }
    if src.base_color.is_some() { dst.base_color = src.base_color; }
    if src.scale.is_some()      { dst.scale = src.scale; }
    if src.output.is_some()     { dst.output = src.output; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }

    let any_preview = cli.icon.is_some()
        || cli.size.is_some()
        || cli.base_color.is_some()
        || cli.scale.is_some()
        || cli.output.is_some();
    if any_preview && cfg.preview.is_none() {
        cfg.preview = Some(PreviewConfig::default());
    }
    if let Some(preview) = cfg.preview.as_mut() {
        if cli.icon.is_some()       { preview.icon = cli.icon.clone(); }
        if cli.size.is_some()       { preview.size = cli.size.clone(); }
        if cli.base_color.is_some() { preview.base_color = cli.base_color.clone(); }
        if cli.scale.is_some()      { preview.scale = cli.scale; }
        if cli.output.is_some()     { preview.output = cli.output.clone(); }
    }
}

/// Everything that parses later must parse now.
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.palette_rgb565()?;
    let preview = cfg.preview_settings()?;
    if preview.scale == 0 || preview.scale > MAX_SCALE {
        return Err(ConfigError::Validation(format!(
            "preview scale must be 1..={MAX_SCALE}"
        )));
    }
    Ok(())
}

impl Config {
    /// Stock TFT palette with any configured overrides applied
    pub fn palette_rgb565(&self) -> Result<Palette<Rgb565>, ConfigError> {
        let mut palette = Palette::ili9341();
        let Some(pc) = self.palette.as_ref() else {
            return Ok(palette);
        };
        let entries = [
            (GlyphPart::Cloud, &pc.cloud),
            (GlyphPart::Raindrop, &pc.raindrop),
            (GlyphPart::Snowflake, &pc.snowflake),
            (GlyphPart::Bolt, &pc.bolt),
            (GlyphPart::Fog, &pc.fog),
            (GlyphPart::Outline, &pc.outline),
        ];
        for (part, spec) in entries {
            if let Some(spec) = spec {
                palette = palette.with(part, parse_color(spec)?);
            }
        }
        Ok(palette)
    }

    pub fn preview_settings(&self) -> Result<PreviewSettings, ConfigError> {
        let pc = self.preview.clone().unwrap_or_default();
        let icon = match pc.icon.as_deref() {
            Some(s) => s.parse::<WeatherIcon>()?,
            None => WeatherIcon::Sunny,
        };
        let size = match pc.size.as_deref() {
            Some(s) => s.parse::<IconSize>()?,
            None => IconSize::Large,
        };
        let base_color = match pc.base_color.as_deref() {
            Some(s) => parse_color(s)?,
            None => ili9341::YELLOW,
        };
        let output = pc
            .output
            .unwrap_or_else(|| PathBuf::from(format!("{icon}-{size}.ppm")));
        Ok(PreviewSettings {
            icon,
            size,
            base_color,
            scale: pc.scale.unwrap_or(4),
            output,
        })
    }
}

/// `#RRGGBB` / `RRGGBB` hex, or one of the TFT colour names.
pub fn parse_color(spec: &str) -> Result<Rgb565, ConfigError> {
    let s = spec.trim().to_ascii_lowercase();
    let named = match s.as_str() {
        "black" => Some(ili9341::BLACK),
        "white" => Some(ili9341::WHITE),
        "lightgrey" | "lightgray" => Some(ili9341::LIGHTGREY),
        "darkgrey" | "darkgray" => Some(ili9341::DARKGREY),
        "cyan" => Some(ili9341::CYAN),
        "yellow" => Some(ili9341::YELLOW),
        "orange" => Some(ili9341::ORANGE),
        "red" => Some(ili9341::RED),
        "green" => Some(ili9341::GREEN),
        "blue" => Some(ili9341::BLUE),
        _ => None,
    };
    if let Some(c) = named {
        return Ok(c);
    }

    let hex = s.strip_prefix('#').unwrap_or(&s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::Color(spec.to_string()));
    }
    let v = u32::from_str_radix(hex, 16).map_err(|_| ConfigError::Color(spec.to_string()))?;
    let rgb = Rgb888::new((v >> 16) as u8, (v >> 8) as u8, v as u8);
    Ok(Rgb565::from(rgb))
}
