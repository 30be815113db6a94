//! inkline-test - Shared test fixtures for the inkline pipeline
//!
//! Builds synthetic notation pages (ink strokes on a white background)
//! in memory so integration tests need no binary fixture files, plus a
//! PNG encoder for tests that must exercise the decode path and a few
//! numeric assertions helpers.

mod error;

pub use error::{TestError, TestResult};

use inkline_core::RgbRaster;

/// Ink color used by fixtures unless stated otherwise.
pub const BLACK: (u8, u8, u8) = (0, 0, 0);

/// Page background color.
pub const WHITE: (u8, u8, u8) = (255, 255, 255);

/// A blank white page.
pub fn blank_page(width: usize, height: usize) -> TestResult<RgbRaster> {
    Ok(RgbRaster::new_filled(width, height, WHITE)?)
}

/// A white page with one full-width horizontal bar of the given color.
///
/// The bar spans rows `[top, top + thickness)`, clipped to the page.
pub fn bar_page(
    width: usize,
    height: usize,
    top: usize,
    thickness: usize,
    color: (u8, u8, u8),
) -> TestResult<RgbRaster> {
    let mut data = vec![0u8; width * height * 3];
    for y in 0..height {
        let in_bar = y >= top && y < (top + thickness).min(height);
        let px = if in_bar { color } else { WHITE };
        for x in 0..width {
            let i = (y * width + x) * 3;
            data[i] = px.0;
            data[i + 1] = px.1;
            data[i + 2] = px.2;
        }
    }
    Ok(RgbRaster::from_vec(width, height, data)?)
}

/// A white page with a sloped black band of the given vertical
/// thickness, descending `rise` rows over the page width.
pub fn sloped_page(
    width: usize,
    height: usize,
    top_at_left: usize,
    thickness: usize,
    rise: usize,
) -> TestResult<RgbRaster> {
    let mut data = vec![255u8; width * height * 3];
    for x in 0..width {
        let top = top_at_left + rise * x / width.max(1);
        for y in top..(top + thickness).min(height) {
            let i = (y * width + x) * 3;
            data[i] = 0;
            data[i + 1] = 0;
            data[i + 2] = 0;
        }
    }
    Ok(RgbRaster::from_vec(width, height, data)?)
}

/// Encode a raster as an 8-bit RGB PNG.
pub fn encode_png(raster: &RgbRaster) -> TestResult<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut enc = png::Encoder::new(&mut out, raster.width() as u32, raster.height() as u32);
        enc.set_color(png::ColorType::Rgb);
        enc.set_depth(png::BitDepth::Eight);
        let mut writer = enc
            .write_header()
            .map_err(|e| TestError::Encode(e.to_string()))?;
        writer
            .write_image_data(raster.data())
            .map_err(|e| TestError::Encode(e.to_string()))?;
    }
    Ok(out)
}

/// Largest minus smallest value; 0 for empty input.
pub fn spread(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    if values.is_empty() { 0.0 } else { max - min }
}

/// Arithmetic mean; 0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
