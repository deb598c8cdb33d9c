// SPDX-License-Identifier: MIT
//! # pix-scale: Integer Block Upscaling for Pixel-Art Output
//!
//! CPU upscaler that expands every source pixel into an N×N block of
//! identical pixels. This is deliberate nearest-neighbor replication, not
//! filtering: hard edges stay hard, which is the point for pixel-art style
//! images where each pixel is one glyph cell.
//!
//! Every destination pixel's source is uniquely determined by integer
//! division of its coordinates by the factor, so the scaler writes each
//! destination row directly from the source buffer. No intermediate
//! expanded rows or columns are materialized.
//!
//! ## Usage
//!
//! ```rust
//! use pix_scale::{scale_to_vec, Size};
//!
//! let src = vec![255u8; 4]; // one white RGBA pixel
//! let out = scale_to_vec(&src, Size { w: 1, h: 1 }, 3).unwrap();
//! assert_eq!(out.len(), 3 * 3 * 4);
//! ```

const BYTES_PER_PIXEL: usize = 4; // RGBA8

/// A 2D size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug)]
pub enum ScaleError {
    /// A factor of zero would produce a degenerate empty image.
    ZeroFactor,
    /// Source buffer does not hold `w * h` RGBA pixels.
    SourceTooSmall,
    /// Destination buffer cannot hold `w*N * h*N` RGBA pixels.
    BufferTooSmall,
}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::ZeroFactor => write!(f, "Scale factor must be at least 1"),
            ScaleError::SourceTooSmall => write!(f, "Source buffer too small for its declared size"),
            ScaleError::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

impl std::error::Error for ScaleError {}

/// Output dimensions for scaling `src` by `factor`.
pub fn scaled_size(src: Size, factor: u32) -> Size {
    Size {
        w: src.w * factor,
        h: src.h * factor,
    }
}

/// Main scaling entry point.
///
/// `src` must hold `src_size.w * src_size.h` tightly-packed RGBA pixels;
/// `dst` must hold at least `(src_size.w * factor) * (src_size.h * factor)`
/// of them. Each destination pixel `(x, y)` receives source pixel
/// `(x / factor, y / factor)`. A factor of 1 copies the image unchanged.
pub fn scale_rgba(
    src: &[u8],
    src_size: Size,
    factor: u32,
    dst: &mut [u8],
) -> Result<(), ScaleError> {
    if factor == 0 {
        return Err(ScaleError::ZeroFactor);
    }

    let src_row_bytes = src_size.w as usize * BYTES_PER_PIXEL;
    let src_len = src_row_bytes * src_size.h as usize;
    if src.len() < src_len {
        return Err(ScaleError::SourceTooSmall);
    }

    let out = scaled_size(src_size, factor);
    let dst_row_bytes = out.w as usize * BYTES_PER_PIXEL;
    let dst_len = dst_row_bytes * out.h as usize;
    if dst.len() < dst_len {
        return Err(ScaleError::BufferTooSmall);
    }

    let n = factor as usize;
    for dy in 0..out.h as usize {
        let sy = dy / n;
        let src_row = &src[sy * src_row_bytes..sy * src_row_bytes + src_row_bytes];
        let dst_row = &mut dst[dy * dst_row_bytes..dy * dst_row_bytes + dst_row_bytes];
        if n == 1 {
            dst_row.copy_from_slice(src_row);
            continue;
        }
        for sx in 0..src_size.w as usize {
            let px = &src_row[sx * BYTES_PER_PIXEL..(sx + 1) * BYTES_PER_PIXEL];
            let start = sx * n * BYTES_PER_PIXEL;
            for i in 0..n {
                let at = start + i * BYTES_PER_PIXEL;
                dst_row[at..at + BYTES_PER_PIXEL].copy_from_slice(px);
            }
        }
    }

    Ok(())
}

/// Allocating convenience wrapper around [`scale_rgba`].
pub fn scale_to_vec(src: &[u8], src_size: Size, factor: u32) -> Result<Vec<u8>, ScaleError> {
    let out = scaled_size(src_size, factor);
    let mut dst = vec![0u8; out.w as usize * out.h as usize * BYTES_PER_PIXEL];
    scale_rgba(src, src_size, factor, &mut dst)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], size: Size, x: u32, y: u32) -> [u8; 4] {
        let at = (y as usize * size.w as usize + x as usize) * BYTES_PER_PIXEL;
        [buf[at], buf[at + 1], buf[at + 2], buf[at + 3]]
    }

    /// 2x2 test image with four distinct colors.
    fn sample() -> (Vec<u8>, Size) {
        let buf = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            0, 0, 0, 0, // transparent
        ];
        (buf, Size { w: 2, h: 2 })
    }

    #[test]
    fn factor_one_is_identity() {
        let (src, size) = sample();
        let out = scale_to_vec(&src, size, 1).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn factor_zero_is_rejected() {
        let (src, size) = sample();
        assert!(matches!(
            scale_to_vec(&src, size, 0),
            Err(ScaleError::ZeroFactor)
        ));
    }

    #[test]
    fn destination_pixel_comes_from_divided_coordinates() {
        let (src, size) = sample();
        for factor in [1u32, 2, 3, 5] {
            let out_size = scaled_size(size, factor);
            let out = scale_to_vec(&src, size, factor).unwrap();
            for y in 0..out_size.h {
                for x in 0..out_size.w {
                    assert_eq!(
                        pixel(&out, out_size, x, y),
                        pixel(&src, size, x / factor, y / factor),
                        "factor {} at ({}, {})",
                        factor,
                        x,
                        y
                    );
                }
            }
        }
    }

    #[test]
    fn blocks_are_uniform() {
        let (src, size) = sample();
        let out = scale_to_vec(&src, size, 4).unwrap();
        let out_size = scaled_size(size, 4);
        // every pixel of the top-left 4x4 block is the red source pixel
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(pixel(&out, out_size, x, y), [255, 0, 0, 255]);
            }
        }
        // and the bottom-right block stays fully transparent
        for y in 4..8 {
            for x in 4..8 {
                assert_eq!(pixel(&out, out_size, x, y), [0, 0, 0, 0]);
            }
        }
    }

    #[test]
    fn short_destination_buffer_is_rejected() {
        let (src, size) = sample();
        let mut dst = vec![0u8; 4];
        assert!(matches!(
            scale_rgba(&src, size, 2, &mut dst),
            Err(ScaleError::BufferTooSmall)
        ));
    }
}
