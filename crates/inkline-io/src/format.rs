//! Image format detection
//!
//! Detects image formats by examining magic numbers at the start of the
//! byte buffer.

use crate::{IoError, IoResult};

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";
}

/// Encoded image container formats the pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
}

/// Detect the image format from leading bytes.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if no known signature matches.
pub fn detect_format(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() >= magic::PNG.len() && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }
    if data.len() >= magic::JPEG.len() && data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }
    if data.len() >= magic::BMP.len() && data.starts_with(magic::BMP) {
        return Ok(ImageFormat::Bmp);
    }
    Err(IoError::UnsupportedFormat(
        "no PNG, JPEG, or BMP signature found".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        assert_eq!(detect_format(&header).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let header = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(detect_format(&header).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_bmp() {
        assert_eq!(detect_format(b"BM\x00\x00").unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn test_unknown_rejected() {
        assert!(detect_format(b"GIF89a").is_err());
        assert!(detect_format(&[]).is_err());
    }
}
