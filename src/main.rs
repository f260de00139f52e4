// What you SEE:
// • A quarter of a circle, centred on the bottom-right corner, scaled to fill the window.
// • Red blocks on its edge: the pixels the midpoint circle algorithm plots.
// • HUD on top: radius, counted perimeter/area pixels and the pi each one implies.
// • Up/Down: radius ±1, PageUp/PageDown: ±10, S: save PNG, ESC quits.
//
// With --headless (or --sweep-to) nothing opens; the numbers go to stdout.

mod area;
mod cli;
mod draw;
mod error;
mod estimate;
mod perimeter;
mod surface;
mod types;

use clap::Parser;
use cli::{Args, Config, Mode};
use draw::{blit_scaled, draw_hud, draw_midpoint_outline, Drawer, OUTLINE};
use error::Error;
use estimate::Estimate;
use std::io::{self, Write};
use std::path::PathBuf;
use surface::Bitmap;
use types::{FrameBuffer, Radius};

fn main() -> Result<(), Error> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = Config::from_args(Args::parse())?;
    log::debug!("config: {config:?}");

    match config.mode {
        Mode::Window { size } => run_window(&config, size),
        Mode::Report | Mode::Sweep { .. } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_report(&config, &mut out)
        }
    }
}

/// Headless output: one full report, or one row per radius for a sweep.
fn write_report<W: Write>(config: &Config, out: &mut W) -> Result<(), Error> {
    let io_err = |e: io::Error| Error::Output(e.to_string());
    let mut bitmap = Bitmap::new();

    let first = Estimate::compute(config.radius, &mut bitmap);
    if let Some(path) = &config.save {
        bitmap.save_png(path)?;
    }

    match config.mode {
        Mode::Sweep { to } => {
            if !config.json {
                writeln!(out, "{}", Estimate::table_header()).map_err(io_err)?;
            }
            let mut est = first;
            let mut r = config.radius;
            loop {
                if config.json {
                    writeln!(out, "{}", est.to_json()?).map_err(io_err)?;
                } else {
                    writeln!(out, "{}", est.table_row()).map_err(io_err)?;
                }
                if r >= to {
                    break;
                }
                r = r.offset(1)?;
                est = Estimate::compute(r, &mut bitmap);
            }
        }
        _ => {
            if config.json {
                writeln!(out, "{}", first.to_json()?).map_err(io_err)?;
            } else {
                writeln!(out, "{first}").map_err(io_err)?;
            }
        }
    }
    out.flush().map_err(io_err)
}

/// HUD text for the window. Only characters the 5x7 font knows.
fn hud_lines(est: &Estimate) -> Vec<String> {
    vec![
        format!("R:{}  PERIM:{:.2}  AREA:{:.2}", est.radius, est.theoretical_perimeter, est.theoretical_area),
        format!("PERIM PX:{}  PI:{:.4}", est.perimeter_pixels, est.perimeter_pi),
        format!("AREA PX:{}  PI:{:.4}", est.area_pixels, est.area_pi),
        String::from("UP/DN  PGUP/PGDN  S SAVE  ESC QUIT"),
    ]
}

fn run_window(config: &Config, size: usize) -> Result<(), Error> {
    /* --- Window + reusable screen buffer ---
       Visual: window opens; `screen` is the image you actually see. */
    let mut drawer = Drawer::new("pixel-pi: quarter circle", size, size)?;
    let mut screen = FrameBuffer::new(size, size);
    log::info!("window open at {size}x{size}, radius {}", config.radius.pixels());

    /* --- First estimate ---
       Visual: the quarter disc for the starting radius. */
    let mut bitmap = Bitmap::new();
    let mut radius: Radius = config.radius;
    let mut estimate = Estimate::compute(radius, &mut bitmap);
    if let Some(path) = &config.save {
        bitmap.save_png(path)?;
    }
    let mut dirty = true; // visual: redraw only after the radius changes

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        if let Some(step) = drawer.radius_step() {
            match radius.offset(step) {
                Ok(next) => {
                    radius = next;
                    estimate = Estimate::compute(radius, &mut bitmap);
                    dirty = true;
                }
                Err(e) => log::warn!("{e}; keeping radius {}", radius.pixels()),
            }
        }

        if drawer.s_pressed_once() {
            let path = PathBuf::from(format!("quarter-{}.png", radius.pixels()));
            if let Err(e) = bitmap.save_png(&path) {
                log::error!("{e}");
            }
        }

        if dirty {
            blit_scaled(&mut screen, bitmap.image());                   // visual: quarter disc
            draw_midpoint_outline(&mut screen, bitmap.side(), OUTLINE); // visual: red plotted edge
            draw_hud(&mut screen, &hud_lines(&estimate));               // visual: numbers on top
            dirty = false;
        }

        drawer.present(&screen)?;
    }

    log::info!("window closed at radius {}", radius.pixels());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn headless(radius: f64, mode: Mode, json: bool) -> Config {
        Config { radius: Radius::new(radius).unwrap(), mode, json, save: None }
    }

    fn run(config: &Config) -> String {
        let mut out = Vec::new();
        write_report(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_report_for_radius_ten() {
        let text = run(&headless(10.0, Mode::Report, false));
        assert!(text.contains("radius:                 10"));
        assert!(text.contains("pi from perimeter:      3.200000"));
        assert!(text.contains("pi from area:           3.160000"));
    }

    #[test]
    fn json_report_is_one_line() {
        let text = run(&headless(10.0, Mode::Report, true));
        assert_eq!(text.lines().count(), 1);
        let v: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(v["area_pixels"], 316);
    }

    #[test]
    fn sweep_prints_header_and_every_radius() {
        let to = Radius::new(15.0).unwrap();
        let text = run(&headless(10.0, Mode::Sweep { to }, false));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 6);
        assert!(lines[0].contains("radius"));
        assert!(lines[1].trim_start().starts_with("10 "));
        assert!(lines[6].trim_start().starts_with("15 "));
    }

    #[test]
    fn single_step_sweep_in_json() {
        let to = Radius::new(3.0).unwrap();
        let text = run(&headless(3.0, Mode::Sweep { to }, true));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn report_saves_png_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r12.png");
        let mut config = headless(12.0, Mode::Report, false);
        config.save = Some(path.clone());
        run(&config);
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (12, 12));
    }

    #[test]
    fn hud_uses_only_known_glyphs() {
        let mut bitmap = Bitmap::new();
        let est = Estimate::compute(Radius::new(321.0).unwrap(), &mut bitmap);
        for line in hud_lines(&est) {
            for ch in line.chars() {
                assert!(draw::glyph5x7(ch).is_some(), "no glyph for {ch:?} in {line:?}");
            }
        }
    }
}
