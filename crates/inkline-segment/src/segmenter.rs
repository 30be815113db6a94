//! Mask construction and stroke discovery
//!
//! Runs the full segmentation sequence on the grayscale raster:
//! inverted threshold, median denoise, Gaussian smoothing, dilation,
//! closing, re-binarization, and external contour extraction.

use crate::config::SegmentationConfig;
use crate::contour::{Stroke, find_strokes};
use crate::error::{SegmentError, SegmentResult};
use crate::filter::{gaussian_smooth_5x5, median_filter};
use crate::morph::{close_brick, dilate_brick};
use crate::threshold::{rebinarize, threshold_inverted};
use inkline_core::{BinaryMask, GrayRaster};

/// Segmentation output: the discovered strokes and the cleaned mask they
/// were traced on. The mask is what the sampler measures against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub strokes: Vec<Stroke>,
    pub mask: BinaryMask,
}

/// Segment the grayscale raster into candidate strokes.
///
/// # Errors
///
/// - [`SegmentError::InvalidConfig`] for structurally invalid settings
/// - [`SegmentError::NoStrokesFound`] if the cleaned mask contains no
///   foreground region; an input assumed to carry notation must yield
///   at least one stroke
pub fn segment(gray: &GrayRaster, config: &SegmentationConfig) -> SegmentResult<Segmentation> {
    config.validate()?;

    let mut mask = threshold_inverted(gray, config.threshold)?;
    if config.median_aperture > 1 {
        mask = median_filter(&mask, config.median_aperture);
    }
    if config.smooth {
        mask = gaussian_smooth_5x5(&mask);
    }
    mask = dilate_brick(&mask, config.kernel);
    mask = close_brick(&mask, config.kernel);

    let mask = rebinarize(&mask, config.rebinarize_threshold)?;
    if mask.count_ink() == 0 {
        // Blank page after cleanup
        return Err(SegmentError::NoStrokesFound);
    }

    let strokes = find_strokes(&mask);
    Ok(Segmentation { strokes, mask })
}
