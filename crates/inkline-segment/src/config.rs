//! Segmentation configuration

use crate::{SegmentError, SegmentResult};

/// Tuning knobs for mask construction and contour extraction.
///
/// The defaults reproduce the calibrated production behavior: threshold
/// 200, 3x3 median denoise, 5x5 Gaussian smoothing, 5x5 brick for
/// dilation and closing, re-binarization at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationConfig {
    /// Inverted binary threshold: gray values at or below this become
    /// foreground (ink is dark on a light page)
    pub threshold: u8,
    /// Median filter aperture for speckle removal; 0 disables
    pub median_aperture: usize,
    /// Apply 5x5 Gaussian smoothing before morphology
    pub smooth: bool,
    /// Side length of the square structuring element used for dilation
    /// and closing; must be odd
    pub kernel: usize,
    /// Threshold that re-binarizes the smoothed, morphed mask
    pub rebinarize_threshold: u8,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            threshold: 200,
            median_aperture: 3,
            smooth: true,
            kernel: 5,
            rebinarize_threshold: 100,
        }
    }
}

impl SegmentationConfig {
    /// Check structural validity (odd apertures).
    pub fn validate(&self) -> SegmentResult<()> {
        if self.kernel == 0 || self.kernel % 2 == 0 {
            return Err(SegmentError::InvalidConfig("kernel must be odd"));
        }
        if self.median_aperture != 0 && self.median_aperture % 2 == 0 {
            return Err(SegmentError::InvalidConfig(
                "median aperture must be odd or 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SegmentationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_even_kernel_rejected() {
        let cfg = SegmentationConfig {
            kernel: 4,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_even_median_rejected() {
        let cfg = SegmentationConfig {
            median_aperture: 2,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
