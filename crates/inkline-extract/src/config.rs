//! Sampling and pipeline configuration

use crate::{ExtractError, ExtractResult};
use inkline_segment::SegmentationConfig;

/// How the per-slice vertical centerline is measured.
///
/// The production default is [`DirectCenterline`](Self::DirectCenterline),
/// the multi-stroke variant. [`RotatedWindow`](Self::RotatedWindow) is
/// the older single-stroke strategy kept as an alternative: it estimates
/// the local stroke orientation from neighboring centerline points and
/// re-measures the center along the direction perpendicular to the
/// stroke, which reduces bias on steeply sloped strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingStrategy {
    /// Vertical column scan at each slice's center of mass
    #[default]
    DirectCenterline,
    /// Orientation-corrected scan perpendicular to the local stroke
    /// direction
    RotatedWindow,
}

/// Per-stroke sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Width of each column slice in pixels; the remainder of a
    /// bounding box narrower than one hop is discarded
    pub hop: usize,
    /// Bounded search radius for the margin (thickness) probe, and the
    /// intensity normalization divisor
    pub margin_radius: u32,
    /// Centerline measurement strategy
    pub strategy: SamplingStrategy,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            hop: 3,
            margin_radius: 30,
            strategy: SamplingStrategy::default(),
        }
    }
}

/// Vertical padding added during preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// White margin of round(resized_height / 2) rows above and below,
    /// guaranteeing vertical room for strokes at the original edges
    #[default]
    Half,
    /// No padding
    None,
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Integer downscale divisor applied before analysis (4 in the
    /// production pipeline, 2 in the earlier variant, 1 to disable)
    pub scale_divisor: usize,
    /// Vertical padding mode
    pub border: BorderMode,
    pub segmentation: SegmentationConfig,
    pub sampling: SamplingConfig,
    /// Retain the preprocessed raster and cleaned mask in the result
    /// for inspection. Per-call, so concurrent invocations with
    /// different debug needs cannot interfere.
    pub keep_intermediates: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scale_divisor: 4,
            border: BorderMode::default(),
            segmentation: SegmentationConfig::default(),
            sampling: SamplingConfig::default(),
            keep_intermediates: false,
        }
    }
}

impl PipelineConfig {
    /// Check structural validity of the whole configuration.
    pub fn validate(&self) -> ExtractResult<()> {
        if self.scale_divisor == 0 {
            return Err(ExtractError::InvalidConfig("scale divisor must be >= 1"));
        }
        if self.sampling.hop == 0 {
            return Err(ExtractError::InvalidConfig("hop must be >= 1"));
        }
        if self.sampling.margin_radius == 0 {
            return Err(ExtractError::InvalidConfig("margin radius must be >= 1"));
        }
        self.segmentation.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_hop_rejected() {
        let mut cfg = PipelineConfig::default();
        cfg.sampling.hop = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let cfg = PipelineConfig {
            scale_divisor: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
