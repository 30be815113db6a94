//! Binary thresholding
//!
//! Inverted thresholding turns dark ink on a light page into 0/255
//! foreground. The intermediate mask stays in a [`GrayRaster`] because
//! the later smoothing and morphology passes produce gray values before
//! the final re-binarization.

use inkline_core::{BinaryMask, CoreResult, GrayRaster};

/// Inverted binary threshold: values at or below `threshold` map to 255
/// (ink), values above it to 0 (page background).
pub fn threshold_inverted(gray: &GrayRaster, threshold: u8) -> CoreResult<GrayRaster> {
    let data = gray
        .data()
        .iter()
        .map(|&v| if v > threshold { 0 } else { 255 })
        .collect();
    GrayRaster::from_vec(gray.width(), gray.height(), data)
}

/// Re-binarize a gray-valued mask into a strict 0/255 [`BinaryMask`].
///
/// Values strictly above `threshold` become ink.
pub fn rebinarize(mask: &GrayRaster, threshold: u8) -> CoreResult<BinaryMask> {
    let mut out = BinaryMask::new(mask.width(), mask.height())?;
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.get(x, y) > threshold {
                out.set_ink(x, y);
            }
        }
    }
    Ok(out)
}
