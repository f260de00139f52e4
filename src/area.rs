// Area estimator: count fully opaque pixels of the quarter disc, times four.

use crate::surface::Surface;

/// Alpha value of a pixel that the shape covers completely.
pub const OPAQUE: u8 = 255;

/// Count pixels with full alpha in a tightly packed RGBA8 buffer.
/// A trailing partial pixel (len not a multiple of 4) is ignored.
pub fn count_opaque_rgba(buf: &[u8]) -> u64 {
    buf.chunks_exact(4).filter(|px| px[3] == OPAQUE).count() as u64
}

/// Full-circle area estimate from a surface holding one quarter of it.
pub fn estimate_area<S: Surface + ?Sized>(surface: &S) -> u64 {
    surface.opaque_pixel_count() * 4
}
