//! PNG image format support
//!
//! Reads PNG images using the `png` crate. Indexed, grayscale, and
//! sub-8-bit inputs are normalized to 8-bit channels by the decoder;
//! every variant is then converted to interleaved RGB.

use crate::{IoError, IoResult};
use inkline_core::RgbRaster;
use png::{ColorType, Decoder, Transformations};
use std::io::Cursor;

/// Read a PNG image from an encoded byte buffer.
pub fn read_png(bytes: &[u8]) -> IoResult<RgbRaster> {
    let mut decoder = Decoder::new(Cursor::new(bytes));
    // Expand palettes and low bit depths, strip 16-bit down to 8
    decoder.set_transformations(Transformations::normalize_to_color8());

    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::Decode(format!("PNG decode error: {e}")))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::Decode("PNG output buffer size unavailable".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::Decode(format!("PNG frame error: {e}")))?;
    buf.truncate(info.buffer_size());

    let width = info.width as usize;
    let height = info.height as usize;
    if width == 0 || height == 0 {
        return Err(IoError::EmptyImage);
    }

    let mut rgb = Vec::with_capacity(width * height * 3);
    match info.color_type {
        ColorType::Rgb => rgb = buf,
        ColorType::Rgba => {
            for px in buf.chunks_exact(4) {
                rgb.extend_from_slice(&px[..3]);
            }
        }
        ColorType::Grayscale => {
            for &g in &buf {
                rgb.extend_from_slice(&[g, g, g]);
            }
        }
        ColorType::GrayscaleAlpha => {
            for px in buf.chunks_exact(2) {
                let g = px[0];
                rgb.extend_from_slice(&[g, g, g]);
            }
        }
        other => {
            // Indexed is expanded by normalize_to_color8, so this arm
            // only fires on decoder variants added in the future.
            return Err(IoError::Decode(format!(
                "unexpected PNG output color type: {other:?}"
            )));
        }
    }

    Ok(RgbRaster::from_vec(width, height, rgb)?)
}
