// Command line flags and the validated config main() works from.

use crate::error::Error;
use crate::types::Radius;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixel-pi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate pi by rasterizing a quarter circle and counting pixels", long_about = None)]
pub struct Args {
    /// Starting radius in pixels (fractions are truncated)
    #[arg(short, long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub radius: f64,

    /// Print the estimate and exit instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Print one row per radius from --radius up to this value (implies --headless)
    #[arg(long, value_name = "RADIUS")]
    pub sweep_to: Option<f64>,

    /// Emit JSON objects instead of text
    #[arg(long)]
    pub json: bool,

    /// Write the rasterized quarter circle of the starting radius as PNG
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Side of the square window in pixels
    #[arg(long, default_value_t = 512)]
    pub window_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Window { size: usize },
    Report,
    Sweep { to: Radius },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub radius: Radius,
    pub mode: Mode,
    pub json: bool,
    pub save: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, Error> {
        let radius = Radius::new(args.radius)?;

        let mode = if let Some(to) = args.sweep_to {
            let to = Radius::new(to)?;
            if to < radius {
                return Err(Error::InvalidRadius(format!(
                    "--sweep-to {} is below --radius {}",
                    to.pixels(),
                    radius.pixels()
                )));
            }
            Mode::Sweep { to }
        } else if args.headless {
            Mode::Report
        } else {
            if args.window_size == 0 {
                return Err(Error::WindowInit("--window-size must be at least 1".into()));
            }
            Mode::Window { size: args.window_size }
        };

        Ok(Self { radius, mode, json: args.json, save: args.save })
    }
}
