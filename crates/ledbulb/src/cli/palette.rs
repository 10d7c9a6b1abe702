//! `palette` subcommand — show a color and its derived shades.

use serde::Serialize;

use ledbulb_lib::color::{Shades, format_color};

use super::{Result, parse_color};

#[derive(clap::Args)]
pub struct PaletteArgs {
    /// LED color (hex or name)
    #[arg(default_value = "#99FF36")]
    color: String,
}

#[derive(Serialize)]
struct PaletteJson {
    color: String,
    dark: String,
    dark_dark: String,
}

pub fn run(args: PaletteArgs, json: bool) -> Result<()> {
    let shades = Shades::of(parse_color(&args.color)?);
    let out = PaletteJson {
        color: format_color(shades.color),
        dark: format_color(shades.dark),
        dark_dark: format_color(shades.dark_dark),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&out)
                .map_err(|e| ledbulb_lib::LedError::Config(e.to_string()))?
        );
    } else {
        println!("{:<10}{}", "Color", out.color);
        println!("{:<10}{}", "Dark", out.dark);
        println!("{:<10}{}", "DarkDark", out.dark_dark);
    }
    Ok(())
}
