// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the rasterized quarter circle, scaled to fit.
// 2) The midpoint-circle outline plotted on top of it.
// 3) A tiny 5x7 bitmap font to render the HUD with the pi estimates.

use crate::error::Error;
use crate::perimeter::{reflect_eight_ways, MidpointOctant};
use crate::types::FrameBuffer;
use image::RgbaImage;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub const BACKGROUND: u32 = 0x00_FF_FF_FF;
pub const OUTLINE: u32 = 0x00_E0_30_30;
pub const HUD_BAR: u32 = 0x00_20_20_28;
pub const HUD_TEXT: u32 = 0x00_FF_FF_FF;

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a square-ish window of the given size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // nothing animates; no need to spin faster than this
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Radius change requested this frame, if any. Holding a key repeats.
    pub fn radius_step(&self) -> Option<i64> {
        let pressed = |k| self.window.is_key_pressed(k, KeyRepeat::Yes);
        if pressed(Key::Up) {
            Some(1)
        } else if pressed(Key::Down) {
            Some(-1)
        } else if pressed(Key::PageUp) {
            Some(10)
        } else if pressed(Key::PageDown) {
            Some(-10)
        } else {
            None
        }
    }

    // Visual: nothing on screen; a PNG appears next to where you ran the program.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software drawing: pixels, rects, scaled bitmap, outline ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill an axis-aligned rectangle, clipped to the framebuffer.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for yy in y..y + h {
        for xx in x..x + w {
            put_pixel(fb, xx, yy, color);
        }
    }
}

/// Composite one RGBA pixel over the white background, packed 0x00RRGGBB.
#[inline]
fn over_background(rgba: [u8; 4]) -> u32 {
    let a = u32::from(rgba[3]);
    let mix = |c: u8| (u32::from(c) * a + 255 * (255 - a) + 127) / 255;
    (mix(rgba[0]) << 16) | (mix(rgba[1]) << 8) | mix(rgba[2])
}

/// Nearest-neighbour scale the bitmap onto the whole framebuffer.
/// Visual: the quarter disc fills the window, hard pixel edges stay visible.
pub fn blit_scaled(fb: &mut FrameBuffer, src: &RgbaImage) {
    let (sw, sh) = (src.width() as usize, src.height() as usize);
    if sw == 0 || sh == 0 {
        fb.fill(BACKGROUND);
        return;
    }
    for y in 0..fb.height {
        let sy = y * sh / fb.height;
        for x in 0..fb.width {
            let sx = x * sw / fb.width;
            fb.pixels[y * fb.width + x] = over_background(src.get_pixel(sx as u32, sy as u32).0);
        }
    }
}

/// Plot the midpoint circle of `side` over the scaled quarter disc.
/// Only the two reflections landing in the up-left quadrant are visible;
/// each grid cell is painted as a block matching the bitmap scale.
pub fn draw_midpoint_outline(fb: &mut FrameBuffer, side: u32, color: u32) {
    if side == 0 {
        return;
    }
    let side = i64::from(side);
    let (fw, fh) = (fb.width as i64, fb.height as i64);
    for point in MidpointOctant::new(side) {
        for (ox, oy) in reflect_eight_ways(point) {
            // centre sits on the bottom-right corner of the grid
            let (gx, gy) = (side + ox, side + oy);
            if gx < 0 || gy < 0 || gx >= side || gy >= side {
                continue;
            }
            let x0 = gx * fw / side;
            let y0 = gy * fh / side;
            let x1 = ((gx + 1) * fw / side).max(x0 + 1);
            let y1 = ((gy + 1) * fh / side).max(y0 + 1);
            fill_rect(fb, x0 as i32, y0 as i32, (x1 - x0) as i32, (y1 - y0) as i32, color);
        }
    }
}

/* ---------- 5x7 bitmap font (ASCII subset the HUD needs) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
pub(crate) fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters used by the HUD lines
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),

        // Punctuation: space, vertical bar, colon, dot, slash, dash
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '/' => g!(0b00001,0b00010,0b00010,0b00100,0b01000,0b01000,0b10000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph appears with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by (1,1) in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32 + 1, y + ry as i32 + 1, 0x00000000);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string appears; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

/// Draw HUD lines on a dark bar across the top of the frame.
pub fn draw_hud(fb: &mut FrameBuffer, lines: &[String]) {
    let bar_h = 6 + 10 * lines.len() as i32;
    fill_rect(fb, 0, 0, fb.width as i32, bar_h, HUD_BAR);
    for (i, line) in lines.iter().enumerate() {
        draw_text_5x7(fb, 6, 4 + 10 * i as i32, line, HUD_TEXT);
    }
}
