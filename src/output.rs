//! Encoder selection and the output sink.
//!
//! An empty destination means PNG on stdout. Otherwise the destination's
//! file extension picks the encoder: `.png`, `.jpg`, or `.gif`; anything
//! else is a configuration error. Encoding goes through an in-memory
//! buffer first since stdout is not seekable.

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::fs::File;
use std::io::{self, Cursor, Write};
use std::path::Path;

#[derive(Debug)]
pub enum OutputError {
    /// Destination extension maps to no supported encoder.
    UnsupportedFormat { extension: String },
    /// Could not create or truncate the destination file.
    CreateFailed { path: String, source: io::Error },
    /// The encoder itself failed.
    EncodeFailed(image::ImageError),
    /// Writing the encoded bytes to the sink failed.
    WriteFailed(io::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::UnsupportedFormat { extension } => {
                write!(
                    f,
                    "Unsupported output file type '{}' (supported: .png, .jpg, .gif)",
                    extension
                )
            }
            OutputError::CreateFailed { path, source } => {
                write!(f, "Failed to open or create file '{}': {}", path, source)
            }
            OutputError::EncodeFailed(e) => write!(f, "Failed to encode image: {}", e),
            OutputError::WriteFailed(e) => write!(f, "Failed to write image: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::UnsupportedFormat { .. } => None,
            OutputError::CreateFailed { source, .. } => Some(source),
            OutputError::EncodeFailed(e) => Some(e),
            OutputError::WriteFailed(e) => Some(e),
        }
    }
}

/// Maps a destination path to its encoder. Empty path means stdout, which
/// defaults to PNG.
pub fn format_for(path: &str) -> Result<ImageFormat, OutputError> {
    if path.is_empty() {
        return Ok(ImageFormat::Png);
    }
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    match ext {
        "png" => Ok(ImageFormat::Png),
        "jpg" => Ok(ImageFormat::Jpeg),
        "gif" => Ok(ImageFormat::Gif),
        _ => Err(OutputError::UnsupportedFormat {
            extension: ext.to_string(),
        }),
    }
}

/// Encodes `img` in the format selected by `path` and writes it to the
/// file, or to stdout when `path` is empty.
pub fn write_image(path: &str, img: &RgbaImage) -> Result<(), OutputError> {
    let format = format_for(path)?;
    let bytes = encode(img, format)?;

    if path.is_empty() {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(&bytes).map_err(OutputError::WriteFailed)?;
        lock.flush().map_err(OutputError::WriteFailed)
    } else {
        let mut file = File::create(path).map_err(|source| OutputError::CreateFailed {
            path: path.to_string(),
            source,
        })?;
        file.write_all(&bytes).map_err(OutputError::WriteFailed)
    }
}

/// Encodes into an in-memory buffer. JPEG carries no alpha channel, so the
/// image is flattened to RGB for it; PNG and GIF keep RGBA.
fn encode(img: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, OutputError> {
    let mut cursor = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(img.clone())
            .to_rgb8()
            .write_to(&mut cursor, format),
        _ => img.write_to(&mut cursor, format),
    }
    .map_err(OutputError::EncodeFailed)?;
    Ok(cursor.into_inner())
}
