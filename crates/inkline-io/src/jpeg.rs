//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale output is
//! replicated into RGB; CMYK output is rejected as unsupported.

use crate::{IoError, IoResult};
use inkline_core::RgbRaster;
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Cursor;

/// Read a JPEG image from an encoded byte buffer.
pub fn read_jpeg(bytes: &[u8]) -> IoResult<RgbRaster> {
    let mut decoder = Decoder::new(Cursor::new(bytes));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::Decode(format!("JPEG decode error: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::Decode("JPEG header missing after decode".to_string()))?;

    let width = info.width as usize;
    let height = info.height as usize;
    if width == 0 || height == 0 {
        return Err(IoError::EmptyImage);
    }

    let rgb = match info.pixel_format {
        PixelFormat::RGB24 => pixels,
        PixelFormat::L8 => {
            let mut out = Vec::with_capacity(width * height * 3);
            for &g in &pixels {
                out.extend_from_slice(&[g, g, g]);
            }
            out
        }
        PixelFormat::L16 => {
            // Big-endian 16-bit luma, reduced to the high byte
            let mut out = Vec::with_capacity(width * height * 3);
            for px in pixels.chunks_exact(2) {
                out.extend_from_slice(&[px[0], px[0], px[0]]);
            }
            out
        }
        PixelFormat::CMYK32 => {
            return Err(IoError::Decode(
                "CMYK JPEG output is not supported".to_string(),
            ));
        }
    };

    Ok(RgbRaster::from_vec(width, height, rgb)?)
}
