//! # textpic
//!
//! Renders text into a raster image by mapping every byte to a fixed-size
//! color swatch through a 128-entry palette derived from a reference
//! image. One character becomes one pixel; an optional integer upscale
//! pass turns each pixel into an N×N block.
//!
//! ## Architecture
//!
//! - `input`: text acquisition (argv, stdin, execute mode) and geometry
//! - `palette`: the 128-entry byte-to-color lookup table
//! - `raster`: text block → RGBA pixel buffer
//! - `output`: extension-driven encoder selection, file/stdout sink
//! - `config`: run configuration and validation
//!
//! Upscaling lives in the `pix-scale` member crate.
//!
//! Everything is synchronous and single-pass: the palette is built once
//! and read-only afterwards, and every output pixel is computed
//! independently from immutable inputs. All boundary failures are fatal.
//!
//! ## Example
//!
//! ```rust,no_run
//! use textpic::{run, RenderConfig};
//!
//! let config = RenderConfig {
//!     out: "hello.png".to_string(),
//!     scale: 8,
//!     ..Default::default()
//! };
//! run(&config, &["hello".to_string()])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use image::RgbaImage;
use pix_scale::Size;

pub mod config;
pub mod input;
pub mod output;
pub mod palette;
pub mod raster;

pub use config::RenderConfig;
pub use input::TextBlock;
pub use palette::Palette;

/// Runs the full pipeline: gather text, build the palette, rasterize,
/// upscale, encode. `args` is the positional text input; when empty the
/// text comes from stdin.
///
/// Expects a validated configuration; see [`RenderConfig::validate`].
pub fn run(config: &RenderConfig, args: &[String]) -> Result<()> {
    let text = input::gather_text(args, config.execute)?;
    let block = TextBlock::from_text(&text, config.width, config.height);
    log::debug!(
        "rendering {}x{} cells at scale {}",
        block.width,
        block.height,
        config.scale
    );

    let palette = Palette::load(&config.table).context("Failed to build color table")?;
    let img = raster::rasterize(&block, &palette);
    let img = scale_image(&img, config.scale)?;

    output::write_image(&config.out, &img).context("Failed to write output image")?;
    Ok(())
}

/// Expands every pixel of `img` into a `factor`×`factor` block.
fn scale_image(img: &RgbaImage, factor: u32) -> Result<RgbaImage> {
    let size = Size {
        w: img.width(),
        h: img.height(),
    };
    let out = pix_scale::scaled_size(size, factor);
    let buf = pix_scale::scale_to_vec(img.as_raw(), size, factor)?;
    RgbaImage::from_raw(out.w, out.h, buf).context("Scaled buffer has unexpected length")
}
