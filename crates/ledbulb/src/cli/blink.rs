//! `blink` subcommand — simulate the blink timer, one PNG per tick.
//!
//! Plays the host's role: starts the blink, then alternates paint and tick,
//! optionally sleeping for the timer's scheduled interval between frames.

use std::path::PathBuf;

use super::{IndicatorConfig, LedIndicator, PngHost, Result, resolve_color, resolve_geometry};

#[derive(clap::Args)]
pub struct BlinkArgs {
    /// Blink interval in milliseconds
    #[arg(long, default_value_t = 500)]
    interval: u64,

    /// Number of frames to write
    #[arg(long, default_value_t = 6)]
    frames: u32,

    /// LED color (hex or name)
    #[arg(long)]
    color: Option<String>,

    /// Sleep for the interval between frames (real-time playback)
    #[arg(long)]
    wait: bool,

    /// Output directory for frame_NN.png files
    #[arg(long, value_name = "DIR", default_value = "frames")]
    out_dir: PathBuf,
}

pub fn run(args: BlinkArgs, config: &IndicatorConfig) -> Result<()> {
    let color = resolve_color(args.color.as_deref(), config)?;
    let (size, padding) = resolve_geometry(None, None, None, config);
    std::fs::create_dir_all(&args.out_dir)?;

    let mut led = LedIndicator::with_color(color);
    led.blink(args.interval);

    let mut host = PngHost::new(size, padding, args.out_dir.clone());
    for frame in 0..args.frames {
        if led.take_repaint_request() {
            host.set_out(args.out_dir.join(format!("frame_{frame:02}.png")));
            led.paint(&mut host)?;
            log::info!(
                "frame {frame}: {}",
                if led.is_on() { "on" } else { "off" }
            );
        }
        if args.wait
            && let Some(delay) = led.timer().schedule()
        {
            std::thread::sleep(delay);
        }
        led.on_tick();
    }

    println!(
        "Wrote {} frames to {}",
        args.frames,
        args.out_dir.display()
    );
    Ok(())
}
