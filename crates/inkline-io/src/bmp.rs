//! BMP image format support
//!
//! Reads uncompressed 24- and 32-bit Windows bitmaps. Rows are stored
//! bottom-up unless the height field is negative, padded to 4-byte
//! boundaries, with channels in BGR order.

use crate::{IoError, IoResult};
use inkline_core::RgbRaster;

/// BMP file header size
const FILE_HEADER_SIZE: usize = 14;

/// BITMAPINFOHEADER minimum size
const INFO_HEADER_SIZE: usize = 40;

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Read a BMP image from an encoded byte buffer.
pub fn read_bmp(bytes: &[u8]) -> IoResult<RgbRaster> {
    if bytes.len() < FILE_HEADER_SIZE + INFO_HEADER_SIZE {
        return Err(IoError::Decode("BMP data truncated".to_string()));
    }
    if &bytes[0..2] != b"BM" {
        return Err(IoError::Decode("not a BMP file".to_string()));
    }

    let pixel_offset = read_u32(bytes, 10) as usize;
    let header_size = read_u32(bytes, 14) as usize;
    if header_size < INFO_HEADER_SIZE {
        return Err(IoError::Decode(format!(
            "unsupported BMP header size: {header_size}"
        )));
    }

    let width = read_u32(bytes, 18) as i32;
    let raw_height = read_u32(bytes, 22) as i32;
    let planes = read_u16(bytes, 26);
    let bpp = read_u16(bytes, 28);
    let compression = read_u32(bytes, 30);

    if planes != 1 {
        return Err(IoError::Decode(format!(
            "unsupported BMP plane count: {planes}"
        )));
    }
    if compression != 0 {
        return Err(IoError::Decode(format!(
            "compressed BMP not supported: method {compression}"
        )));
    }
    if bpp != 24 && bpp != 32 {
        return Err(IoError::Decode(format!("unsupported BMP depth: {bpp} bpp")));
    }
    if width <= 0 || raw_height == 0 {
        return Err(IoError::EmptyImage);
    }

    let top_down = raw_height < 0;
    let width = width as usize;
    let height = raw_height.unsigned_abs() as usize;
    let bytes_per_px = (bpp / 8) as usize;
    let row_stride = (width * bytes_per_px + 3) & !3;

    let needed = pixel_offset + row_stride * height;
    if bytes.len() < needed {
        return Err(IoError::Decode("BMP pixel data truncated".to_string()));
    }

    let mut rgb = Vec::with_capacity(width * height * 3);
    for out_y in 0..height {
        let src_y = if top_down { out_y } else { height - 1 - out_y };
        let row = &bytes[pixel_offset + src_y * row_stride..];
        for x in 0..width {
            let px = &row[x * bytes_per_px..];
            // BGR(A) on disk
            rgb.extend_from_slice(&[px[2], px[1], px[0]]);
        }
    }

    Ok(RgbRaster::from_vec(width, height, rgb)?)
}
