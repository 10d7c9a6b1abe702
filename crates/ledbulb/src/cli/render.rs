//! `render` subcommand — draw one frame of the indicator to a PNG.

use std::path::PathBuf;

use super::{IndicatorConfig, LedIndicator, PngHost, Result, resolve_color, resolve_geometry};

#[derive(clap::Args)]
pub struct RenderArgs {
    /// LED color (hex like "#FF8000" or a name like "red")
    #[arg(long)]
    color: Option<String>,

    /// Render the off state instead of the lit one
    #[arg(long)]
    off: bool,

    /// Frame width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Frame height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Uniform padding around the bulb in pixels
    #[arg(long)]
    padding: Option<u32>,

    /// Output file
    #[arg(long, short, default_value = "led.png")]
    out: PathBuf,
}

pub fn run(args: RenderArgs, config: &IndicatorConfig) -> Result<()> {
    let color = resolve_color(args.color.as_deref(), config)?;
    let (size, padding) = resolve_geometry(args.width, args.height, args.padding, config);

    let mut led = LedIndicator::with_color(color);
    led.set_on(!args.off);

    let mut host = PngHost::new(size, padding, args.out.clone());
    led.paint(&mut host)?;

    println!("Wrote {}", args.out.display());
    Ok(())
}
