//! Ledbulb demo — renders the LED indicator control to PNG frames.

use std::path::PathBuf;

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "ledbulb",
    version,
    about = "Render a blinking LED indicator to PNG frames"
)]
struct Args {
    /// Output as JSON (for palette)
    #[arg(long, global = true)]
    json: bool,

    /// Indicator config TOML; command-line flags override its values
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = cli::run(args.command, args.json, args.config.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
