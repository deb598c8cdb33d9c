//! Byte-value-to-color lookup built from a reference palette image.
//!
//! A [`Palette`] holds exactly 128 RGBA entries, one per ASCII byte value
//! 0–127. The entries come from a 16×8 reference PNG scanned row-major, so
//! pixel `b` of the image is the color of byte `b`. Two reference images
//! ship embedded in the binary; callers may also point at their own PNG.
//!
//! The table is built once at startup and never mutated afterwards; the
//! rasterizer borrows it read-only.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{ImageFormat, Rgba};
use std::fs;
use std::path::Path;

/// Number of entries in a palette table, matching the ASCII range.
pub const TABLE_LEN: usize = 128;

/// Selector value for the embedded alternate reference image.
pub const UEDA_SELECTOR: &str = "ueda";

/// Errors raised while building a palette table. All of them are fatal
/// startup errors; nothing retries a palette load.
#[derive(Debug)]
pub enum PaletteError {
    /// The selector named a file that could not be read.
    OpenFailed {
        path: String,
        source: std::io::Error,
    },
    /// The bytes were not a decodable PNG.
    DecodeFailed(image::ImageError),
    /// The decoded image does not contain exactly 128 pixels.
    WrongPixelCount { found: usize },
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteError::OpenFailed { path, source } => {
                write!(f, "Failed to open palette file '{}': {}", path, source)
            }
            PaletteError::DecodeFailed(e) => {
                write!(f, "Failed to decode palette image: {}", e)
            }
            PaletteError::WrongPixelCount { found } => {
                write!(
                    f,
                    "Palette image must contain exactly {} pixels, found {}",
                    TABLE_LEN, found
                )
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::OpenFailed { source, .. } => Some(source),
            PaletteError::DecodeFailed(e) => Some(e),
            PaletteError::WrongPixelCount { .. } => None,
        }
    }
}

/// The 128-entry color lookup used for all text rendering.
pub struct Palette {
    table: [Rgba<u8>; TABLE_LEN],
}

impl Palette {
    /// Builds a palette from the given selector.
    ///
    /// - `""` loads the embedded default reference image
    /// - `"ueda"` loads the embedded alternate reference image
    /// - anything else is treated as a filesystem path to a PNG
    ///
    /// Whatever the source image holds, entry 32 (space) is forced to
    /// fully-transparent black so padding composites cleanly.
    pub fn load(selector: &str) -> Result<Self, PaletteError> {
        let bytes = match selector {
            "" => embedded_image(DEFAULT_TABLE_B64),
            UEDA_SELECTOR => embedded_image(UEDA_TABLE_B64),
            path => fs::read(Path::new(path)).map_err(|source| PaletteError::OpenFailed {
                path: path.to_string(),
                source,
            })?,
        };
        Self::from_png_bytes(&bytes)
    }

    /// Decodes PNG bytes into a table, scanning pixels row-major.
    fn from_png_bytes(bytes: &[u8]) -> Result<Self, PaletteError> {
        let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(PaletteError::DecodeFailed)?
            .to_rgba8();

        let count = img.width() as usize * img.height() as usize;
        if count != TABLE_LEN {
            return Err(PaletteError::WrongPixelCount { found: count });
        }

        let mut table = [Rgba([0, 0, 0, 0]); TABLE_LEN];
        // pixels() iterates top row left-to-right, then the next row
        for (i, px) in img.pixels().enumerate() {
            table[i] = *px;
        }

        // space is always transparent, whatever the source image says
        table[b' ' as usize] = Rgba([0, 0, 0, 0]);

        Ok(Self { table })
    }

    /// Color for an in-range byte value. Callers guarantee `b <= 127`.
    pub fn color(&self, b: u8) -> Rgba<u8> {
        self.table[b as usize]
    }
}

fn embedded_image(b64: &str) -> Vec<u8> {
    let compact: String = b64.chars().filter(|c| !c.is_whitespace()).collect();
    // embedded constants are known-good base64
    BASE64
        .decode(compact)
        .expect("embedded palette is valid base64")
}

/// Default reference image, a 16×8 PNG (128 pixels).
const DEFAULT_TABLE_B64: &str = "\
iVBORw0KGgoAAAANSUhEUgAAABAAAAAICAYAAADwdn+XAAAAAXNSR0IArs4c6QAAAe9JREFUKJEF
wUFIUwEAgOF/brahbbjmSmaa7pm1uWmZhFlJOBADkUVBnqrDqA4WhIFX6VJQBwkraBaSYFoY0UUP
09EUNK18a63U5Vwb6tRNXLqKTXt9nwyQjEVVCCoVxdokpoIs7PlrpCrOoBeqUFd08XzTgHc2xKdv
teT636MMJwkl9KjlJ5EduXJHKtNcRmUtZLtykRZNHlUlcrreDLHiFVmMRdiIRSmIVXN8ow/rwaP8
K7nI0P4O0jNLKFZdr7BmB2gSf1MbVpBjL6QvkeZZ1hbxTT2Kj5nsOdRG1GFl5+wNGjJ36HZ9Ztx1
innRi6y1vlGqzjFhy1WiPW2CE7OgbKY1uYhHlLhuqcMz8pPAcISQx82ttQkqdXEOCxnkO2qQn2+5
1z7s+4JzcoJtaY7slIEsixZ15C6rY4M4Vl+w7XzLNWGLdFqJrP8STwwC95fCdHa7kUmSJA386eSp
OMb0qBZ1b5CicgHhmBGzqZjy0iLWf+0iNBdnyj1JWJxjfNDMut9HwvcDuW2hp935cItgf5QD6QQX
dHn4VQY0GT6cbT00KoOUvhyh17KbMuEdHftSPNY1YZMF0NbfRGFssHP1QxCXKDH1dQMDmwzoouyt
XEbxvRbHwhrTyb8sP3pNylzHaPM5bldYsa7UMPNgnv9Ye8bsLd6zuwAAAABJRU5ErkJggg==";

/// Alternate reference image ("ueda"), also 16×8.
const UEDA_TABLE_B64: &str = "\
iVBORw0KGgoAAAANSUhEUgAAABAAAAAICAYAAADwdn+XAAABBklEQVR42h3NocvCQACG8f0Tl864
JlgMgu1sKgvCgmUgGNbEJCiY1HbDtmJZEoxydVmjYLtit9vf7+ELv/Q+8CbeGPkuRphjhZPR3huV
mGGIFMZ30McYC2yUGO9lNlhgjD46XqnxGmKGEnt4c8IKc4zQVRKsVRggxxoVblZNsDqgxAQ92JDC
ocAOtRIbgmyNHQo4pEE9GzRBiQMaBHtDhTVyDJRE5xQL7FCDh/hyekSnGyqskcPFKUoc0KBV4mKU
a9HggBLTqNxFrVHhhgeieyGgxg6FEmWZtMIZd7zxy/RVpieuOGKJTHNscUGLjxJyZR+0uGCLubRk
OOKKJ77/4Q9v3HHGSn+bxDdvjY/r3QAAAABJRU5ErkJggg==";
