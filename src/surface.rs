// Drawing surface for the quarter circle.
// Visual: black quarter disc whose centre sits on the bottom-right corner,
// with soft (partially transparent) pixels along the curved edge.

use crate::area::{count_opaque_rgba, OPAQUE};
use crate::error::Error;
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Samples per axis when measuring how much of a pixel the disc covers.
pub const SUPERSAMPLE: u32 = 4;

/// Pen width of the outline stroked on top of the fill (pixels).
pub const STROKE_WIDTH: f64 = 1.0;

const INK: [u8; 3] = [0, 0, 0];

/// What the estimator needs from a rendering target.
pub trait Surface {
    /// Resize to `side x side` and make every pixel transparent.
    fn clear(&mut self, side: u32);
    /// Fill and stroke the quarter arc from angle π to -π/2 about the
    /// bottom-right corner, radius = side.
    fn fill_quarter_arc(&mut self);
    /// Number of pixels whose alpha is at full intensity.
    fn opaque_pixel_count(&self) -> u64;
}

/// In-memory RGBA bitmap; no window or GPU needed.
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    pub fn new() -> Self {
        Self { image: RgbaImage::new(0, 0) }
    }

    pub fn side(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write the current bitmap as a PNG (transparent background kept).
    pub fn save_png(&self, path: &Path) -> Result<(), Error> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| Error::ImageSave(format!("{}: {e}", path.display())))?;
        log::info!("saved {}x{} quarter circle to {}", self.side(), self.side(), path.display());
        Ok(())
    }
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new()
    }
}

/// How many of the `SUPERSAMPLE²` sample points of pixel (px, py) fall
/// within `reach` of the centre (c, c).
fn covered_samples(px: u32, py: u32, c: f64, reach2: f64) -> u32 {
    let n = SUPERSAMPLE;
    let step = 1.0 / f64::from(n);

    // Pixel corner farthest from the centre is (px, py), nearest is (px+1, py+1);
    // samples lie strictly between, so the corners settle most pixels at once.
    let far = (f64::from(px) - c).powi(2) + (f64::from(py) - c).powi(2);
    if far <= reach2 {
        return n * n;
    }
    let near = (f64::from(px + 1) - c).powi(2) + (f64::from(py + 1) - c).powi(2);
    if near > reach2 {
        return 0;
    }

    let mut covered = 0;
    for sy in 0..n {
        for sx in 0..n {
            let dx = f64::from(px) + (f64::from(sx) + 0.5) * step - c;
            let dy = f64::from(py) + (f64::from(sy) + 0.5) * step - c;
            if dx * dx + dy * dy <= reach2 {
                covered += 1;
            }
        }
    }
    covered
}

impl Surface for Bitmap {
    fn clear(&mut self, side: u32) {
        // fresh zeroed buffer = fully transparent
        self.image = RgbaImage::new(side, side);
    }

    fn fill_quarter_arc(&mut self) {
        let side = self.image.width();
        let c = f64::from(side);
        // The stroke straddles the arc, so ink reaches half a pen past it.
        let reach = c + STROKE_WIDTH / 2.0;
        let reach2 = reach * reach;
        let total = SUPERSAMPLE * SUPERSAMPLE;

        // Every pixel of the canvas lies up-left of the centre, i.e. inside
        // the π..3π/2 sweep, so only the distance test matters.
        for (px, py, pixel) in self.image.enumerate_pixels_mut() {
            let covered = covered_samples(px, py, c, reach2);
            if covered == 0 {
                continue;
            }
            let alpha = if covered == total {
                OPAQUE
            } else {
                (255.0 * f64::from(covered) / f64::from(total)).round() as u8
            };
            *pixel = Rgba([INK[0], INK[1], INK[2], alpha]);
        }
    }

    fn opaque_pixel_count(&self) -> u64 {
        count_opaque_rgba(self.image.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn rendered(side: u32) -> Bitmap {
        let mut bmp = Bitmap::new();
        bmp.clear(side);
        bmp.fill_quarter_arc();
        bmp
    }

    #[test]
    fn clear_resizes_and_makes_transparent() {
        let mut bmp = rendered(12);
        bmp.clear(5);
        assert_eq!(bmp.side(), 5);
        assert_eq!(bmp.image().height(), 5);
        assert!(bmp.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn known_opaque_counts() {
        assert_eq!(rendered(1).opaque_pixel_count(), 1);
        assert_eq!(rendered(2).opaque_pixel_count(), 3);
        assert_eq!(rendered(10).opaque_pixel_count(), 79);
    }

    #[test]
    fn corner_pixels() {
        let bmp = rendered(30);
        // next to the centre: solid ink
        assert_eq!(bmp.image().get_pixel(29, 29).0, [0, 0, 0, 255]);
        // far corner is outside the circle
        assert_eq!(bmp.image().get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn edge_pixels_are_partially_transparent() {
        let bmp = rendered(40);
        let soft = bmp
            .image()
            .pixels()
            .filter(|p| p.0[3] > 0 && p.0[3] < OPAQUE)
            .count();
        assert!(soft > 0);
        // soft pixels form a thin band along the arc, not a region
        assert!(soft < 40 * 3);
    }

    #[test]
    fn rendering_twice_is_identical() {
        assert_eq!(rendered(57).image().as_raw(), rendered(57).image().as_raw());
    }

    #[test]
    fn saved_png_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quarter.png");
        let bmp = rendered(20);
        bmp.save_png(&path).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (20, 20));
        assert_eq!(count_opaque_rgba(back.as_raw()), bmp.opaque_pixel_count());
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("quarter.png");
        assert!(matches!(rendered(3).save_png(&path), Err(Error::ImageSave(_))));
    }
}
