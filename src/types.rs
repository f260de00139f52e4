// Core types shared by the counters, the surface and the window.

use crate::error::Error;

/// Largest accepted radius. The bitmap is `side * side * 4` bytes.
pub const MAX_RADIUS: u32 = 8192;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    pub fn fill(&mut self, color: u32) {
        for p in &mut self.pixels { *p = color; }
    }
}

/// A validated radius in whole pixels.
///
/// Input arrives as a float; the fractional part is dropped the same way a
/// drawing surface truncates a fractional width. Anything that would give an
/// empty (or absurdly large) grid is rejected up front, so every later
/// division by `r` or `r²` is safe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Radius(u32);

impl Radius {
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::InvalidRadius(format!("{value} is not a finite number")));
        }
        if value < 1.0 {
            return Err(Error::InvalidRadius(format!("{value} is below 1 pixel")));
        }
        if value >= f64::from(MAX_RADIUS) + 1.0 {
            return Err(Error::InvalidRadius(format!("{value} exceeds {MAX_RADIUS} pixels")));
        }
        Ok(Self(value.trunc() as u32))
    }

    pub fn pixels(self) -> u32 {
        self.0
    }

    /// Step by `delta` pixels, rejecting results outside `1..=MAX_RADIUS`.
    pub fn offset(self, delta: i64) -> Result<Self, Error> {
        Self::new((i64::from(self.0) + delta) as f64)
    }
}
