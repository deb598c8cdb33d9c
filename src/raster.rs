//! Text-block rasterization: one character cell per pixel.
//!
//! Every cell of the output resolves independently through a three-way rule:
//!
//! 1. column beyond the end of its line → transparent black `(0,0,0,0)`,
//!    so short lines composite without a visible box around them
//! 2. byte value above 127 → opaque black `(0,0,0,255)`, a deliberate
//!    "unrepresentable character" marker distinct from padding
//! 3. anything else → direct palette lookup, control bytes included
//!
//! Rows past the supplied line count behave as empty lines, so they come
//! out fully transparent. There is no per-glyph rendering and no font
//! metrics; a character is exactly one pixel.

use crate::input::TextBlock;
use crate::palette::Palette;
use image::{Rgba, RgbaImage};

/// Transparent padding emitted past the end of a line.
pub const PAD: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Marker for byte values outside the palette's 0–127 domain.
pub const OUT_OF_RANGE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Renders `block` into an RGBA buffer of exactly `block.width` ×
/// `block.height` pixels, every cell populated.
pub fn rasterize(block: &TextBlock, palette: &Palette) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(block.width, block.height, PAD);

    for (y, line) in block.lines.iter().enumerate().take(block.height as usize) {
        let bytes = line.as_bytes();
        for x in 0..block.width as usize {
            let color = match bytes.get(x) {
                None => PAD,
                Some(&b) if b > 127 => OUT_OF_RANGE,
                Some(&b) => palette.color(b),
            };
            img.put_pixel(x as u32, y as u32, color);
        }
    }

    img
}
