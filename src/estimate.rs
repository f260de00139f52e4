// One full recompute for a radius: theoretical values, the two pixel counts,
// and the pi each count implies.

use crate::area::estimate_area;
use crate::error::Error;
use crate::perimeter::perimeter_pixel_count;
use crate::surface::Surface;
use crate::types::Radius;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub radius: u32,
    pub theoretical_perimeter: f64,
    pub theoretical_pi: f64,
    pub theoretical_area: f64,
    pub perimeter_pixels: u64,
    pub perimeter_pi: f64,
    pub area_pixels: u64,
    pub area_pi: f64,
}

impl Estimate {
    /// Recompute everything for `radius`, redrawing `surface` from scratch.
    /// Visual: afterwards the surface holds the quarter disc for this radius.
    pub fn compute<S: Surface + ?Sized>(radius: Radius, surface: &mut S) -> Self {
        let r = radius.pixels();
        let rf = f64::from(r);

        let theoretical_perimeter = 2.0 * PI * rf;
        let theoretical_area = PI * rf * rf;

        let perimeter_pixels = perimeter_pixel_count(i64::from(r));

        surface.clear(r);
        surface.fill_quarter_arc();
        let area_pixels = estimate_area(&*surface);

        // r >= 1 is guaranteed by Radius, both divisions are safe.
        let est = Self {
            radius: r,
            theoretical_perimeter,
            theoretical_pi: theoretical_perimeter / (2.0 * rf),
            theoretical_area,
            perimeter_pixels,
            perimeter_pi: perimeter_pixels as f64 / (2.0 * rf),
            area_pixels,
            area_pi: area_pixels as f64 / (rf * rf),
        };
        log::debug!(
            "r={} perimeter_px={} area_px={} pi~{:.4}/{:.4}",
            r, est.perimeter_pixels, est.area_pixels, est.perimeter_pi, est.area_pi
        );
        est
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Serialize(e.to_string()))
    }

    /// One fixed-width line for sweep tables; see `table_header`.
    pub fn table_row(&self) -> String {
        format!(
            "{:>6} {:>12.2} {:>14.2} {:>9} {:>8.5} {:>10} {:>8.5}",
            self.radius,
            self.theoretical_perimeter,
            self.theoretical_area,
            self.perimeter_pixels,
            self.perimeter_pi,
            self.area_pixels,
            self.area_pi,
        )
    }

    pub fn table_header() -> String {
        format!(
            "{:>6} {:>12} {:>14} {:>9} {:>8} {:>10} {:>8}",
            "radius", "perimeter", "area", "perim_px", "pi_p", "area_px", "pi_a"
        )
    }
}

impl Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "radius:                 {}", self.radius)?;
        writeln!(f, "theoretical perimeter:  {:.4}", self.theoretical_perimeter)?;
        writeln!(f, "theoretical pi:         {:.6}", self.theoretical_pi)?;
        writeln!(f, "theoretical area:       {:.4}", self.theoretical_area)?;
        writeln!(f, "perimeter pixels:       {}", self.perimeter_pixels)?;
        writeln!(f, "pi from perimeter:      {:.6}", self.perimeter_pi)?;
        writeln!(f, "practical area:         {}", self.area_pixels)?;
        write!(f, "pi from area:           {:.6}", self.area_pi)
    }
}
