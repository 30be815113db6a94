//! Inkline I/O - Image decoding for the notation analysis pipeline
//!
//! Decodes an encoded image, from a filesystem path or an in-memory byte
//! buffer, into an [`RgbRaster`]. Formats are dispatched on magic bytes:
//! PNG (via the `png` crate), JPEG (via `jpeg-decoder`), and
//! uncompressed BMP (hand-rolled reader).
//!
//! Decoding has no side effects beyond reading the input. Failures are
//! fatal to the caller's pipeline invocation: retrying identical bytes
//! cannot succeed.

mod bmp;
mod error;
mod format;
mod jpeg;
mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format};

use inkline_core::RgbRaster;
use std::path::Path;

/// Decode an encoded image from an in-memory byte buffer.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if no known signature matches
/// - [`IoError::Decode`] if the matched codec rejects the data
/// - [`IoError::EmptyImage`] if decoding yields a zero-dimension image
pub fn decode_image(bytes: &[u8]) -> IoResult<RgbRaster> {
    match detect_format(bytes)? {
        ImageFormat::Png => png::read_png(bytes),
        ImageFormat::Jpeg => jpeg::read_jpeg(bytes),
        ImageFormat::Bmp => bmp::read_bmp(bytes),
    }
}

/// Read and decode an image file.
///
/// # Errors
///
/// [`IoError::Io`] if the file cannot be read, otherwise as
/// [`decode_image`].
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbRaster> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_dispatch_rejects_unknown() {
        let err = decode_image(b"not an image at all").unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_read_image_missing_file() {
        let err = read_image("/nonexistent/inkline-test.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
