//! CLI subcommands — single-frame render, blink simulation, shade palette.

mod blink;
mod palette;
mod render;

use std::path::{Path, PathBuf};

use clap::Subcommand;

pub(super) use ledbulb_lib::canvas::Canvas;
pub(super) use ledbulb_lib::color::parse_color;
pub(super) use ledbulb_lib::config::IndicatorConfig;
pub(super) use ledbulb_lib::error::{LedError, Result};
pub(super) use ledbulb_lib::host::Host;
pub(super) use ledbulb_lib::indicator::LedIndicator;
pub(super) use ledbulb_lib::layout::{Padding, Size};

#[derive(Subcommand)]
pub enum Command {
    /// Render a single frame to a PNG file
    Render(render::RenderArgs),
    /// Simulate blinking, writing one PNG per timer tick
    Blink(blink::BlinkArgs),
    /// Show the derived dark/darkest shades for a color
    Palette(palette::PaletteArgs),
}

pub fn run(command: Command, json: bool, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    match command {
        Command::Render(args) => render::run(args, &config),
        Command::Blink(args) => blink::run(args, &config),
        Command::Palette(args) => palette::run(args, json),
    }
}

fn load_config(path: Option<&Path>) -> Result<IndicatorConfig> {
    match path {
        Some(p) => {
            let config = IndicatorConfig::load(p)?;
            log::info!("loaded config from {}", p.display());
            Ok(config)
        }
        None => Ok(IndicatorConfig::default()),
    }
}

// ── PNG host ──

/// Host that presents frames as PNG files via the `image` crate.
pub(super) struct PngHost {
    size: Size,
    padding: Padding,
    out: PathBuf,
}

impl PngHost {
    pub(super) fn new(size: Size, padding: Padding, out: PathBuf) -> Self {
        PngHost { size, padding, out }
    }

    pub(super) fn set_out(&mut self, out: PathBuf) {
        self.out = out;
    }
}

impl Host for PngHost {
    fn client_size(&self) -> Size {
        self.size
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn present(&mut self, frame: &Canvas) -> Result<()> {
        let img = image::RgbaImage::from_raw(
            frame.width(),
            frame.height(),
            frame.as_rgba().to_vec(),
        )
        .ok_or_else(|| LedError::Surface("frame buffer size mismatch".into()))?;
        img.save(&self.out)
            .map_err(|e| LedError::Surface(format!("failed to write {}: {e}", self.out.display())))?;
        log::debug!("presented {}x{} frame to {}", frame.width(), frame.height(), self.out.display());
        Ok(())
    }
}

/// Resolve the indicator color: flag wins over config.
pub(super) fn resolve_color(flag: Option<&str>, config: &IndicatorConfig) -> Result<ledbulb_lib::color::Rgba> {
    match flag {
        Some(s) => parse_color(s),
        None => config.led_color(),
    }
}

/// Resolve frame geometry: flags win over config.
pub(super) fn resolve_geometry(
    width: Option<u32>,
    height: Option<u32>,
    padding: Option<u32>,
    config: &IndicatorConfig,
) -> (Size, Padding) {
    let size = Size::new(
        width.unwrap_or(config.width),
        height.unwrap_or(config.height),
    );
    let padding = match padding {
        Some(p) => Padding::uniform(p),
        None => config.padding(),
    };
    (size, padding)
}
