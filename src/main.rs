/*
 *  main.rs
 *
 *  weather-glyphs - LyMonS glyph kit
 *  (c) 2020-26 Stuart Hunter
 *
 *  Preview tool: render one glyph into a PPM image
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

use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use weather_glyphs::config::{self, Cli};
use weather_glyphs::palette::{ili9341, rgb565_raw};
use weather_glyphs::{IconRenderer, VarFrameBuf};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // logger waits for the file's log_level; load hands back the path it read
    let cfg = config::load(&cli)?;

    if cli.dump_config {
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        return Ok(());
    }

    let level = cfg.log_level.clone().unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();

    info!("{} v.{} built {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), BUILD_DATE);
    match cfg.source.as_ref() {
        Some(p) => info!("Loaded config from {}", p.display()),
        None => debug!("No config file found, using defaults"),
    }

    let renderer = IconRenderer::new(cfg.palette_rgb565()?);
    let preview = cfg.preview_settings()?;
    let palette = renderer.palette();
    debug!(
        "palette cloud={:#06x} rain={:#06x} snow={:#06x} bolt={:#06x}",
        rgb565_raw(palette.cloud),
        rgb565_raw(palette.raindrop),
        rgb565_raw(palette.snowflake),
        rgb565_raw(palette.bolt),
    );

    // twice the nominal box, glyph inset by a quarter, leaves room for the
    // parts that overhang (clouds, the bolt)
    let dim = preview.size.dimension();
    let inset = (dim / 4) as i32;
    let mut fb = VarFrameBuf::new(dim * 2, dim * 2, ili9341::BLACK);

    let Ok(()) = renderer.draw(&mut fb, preview.icon, preview.size, inset, inset, preview.base_color);

    let file = File::create(&preview.output)
        .with_context(|| format!("creating {}", preview.output.display()))?;
    let mut out = BufWriter::new(file);
    fb.write_ppm(&mut out, preview.scale)
        .with_context(|| format!("writing {}", preview.output.display()))?;

    info!(
        "{} {} glyph -> {} ({}x{} px)",
        preview.size,
        preview.icon,
        preview.output.display(),
        fb.width() as u32 * preview.scale,
        fb.height() as u32 * preview.scale,
    );
    Ok(())
}
