//! Run configuration and validation.
//!
//! `RenderConfig` is the common interface between the CLI and the render
//! pipeline. Validation happens once, up front; past that point the
//! configuration is treated as correct.
//!
//! ## Parameters
//!
//! | Parameter | Type | Description |
//! |-----------|------|-------------|
//! | `out` | `String` | Output path; empty means PNG on stdout |
//! | `execute` | `bool` | Run the input as a shell command first |
//! | `width` | `Option<u32>` | Explicit width; inferred when unset |
//! | `height` | `Option<u32>` | Explicit height; inferred when unset |
//! | `scale` | `u32` | Integer upscale factor, 1 = no scaling |
//! | `table` | `String` | Palette selector; empty for the default |
//!
//! The `scale` flag is an integer pixel-replication multiplier. It is not
//! a percentage: `-s 3` turns every cell into a 3×3 block.

use crate::output;

/// Configuration for one render run.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output destination; empty writes PNG to stdout, otherwise the file
    /// extension selects the encoder (.png, .jpg, .gif).
    pub out: String,

    /// Execute mode: treat the assembled input text as a shell command
    /// and render its captured stdout instead.
    pub execute: bool,

    /// Explicit output width in cells. `None` infers the longest line's
    /// byte length.
    pub width: Option<u32>,

    /// Explicit output height in cells. `None` infers the line count.
    pub height: Option<u32>,

    /// Integer upscale factor. Every cell becomes a `scale`×`scale`
    /// pixel block; 1 leaves the image untouched. Must be at least 1.
    pub scale: u32,

    /// Palette selector: empty for the embedded default table, `"ueda"`
    /// for the embedded alternate, anything else a path to a 16×8 PNG.
    pub table: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out: String::new(),
            execute: false,
            width: None,
            height: None,
            scale: 1,
            table: String::new(),
        }
    }
}

impl RenderConfig {
    /// Validates the configuration.
    ///
    /// Checks the scale factor, explicit geometry overrides, and that the
    /// output destination maps to a supported encoder, so a bad `--out`
    /// fails before any rendering work happens.
    pub fn validate(&self) -> Result<(), String> {
        if self.scale == 0 {
            return Err("Scale factor must be at least 1".to_string());
        }
        if self.width == Some(0) {
            return Err("Width must be at least 1 when given".to_string());
        }
        if self.height == Some(0) {
            return Err("Height must be at least 1 when given".to_string());
        }
        output::format_for(&self.out).map_err(|e| e.to_string())?;
        Ok(())
    }
}
