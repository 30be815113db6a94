//! End-to-end extraction pipeline
//!
//! [`Pipeline`] owns a validated [`PipelineConfig`] and runs the whole
//! sequence: decode, downscale, pad, grayscale/HSV conversion,
//! segmentation, per-stroke centerline sampling, feature measurement,
//! and parameter assembly.
//!
//! Strokes whose bounding box is degenerate or narrower than one hop are
//! skipped individually; if every detected stroke is skipped the run
//! fails with [`ExtractError::NoUsableStrokes`] rather than returning an
//! empty success.

use std::path::Path;

use crate::assembler::assemble;
use crate::config::{BorderMode, PipelineConfig};
use crate::error::{ExtractError, ExtractResult};
use crate::features::{column_features, margin};
use crate::sampler::centerline;
use inkline_core::{BinaryMask, RgbRaster, Sample, StrokeInfo};
use inkline_io::{decode_image, read_image};
use inkline_segment::segment;

const WHITE: (u8, u8, u8) = (255, 255, 255);

/// Intermediate products retained when
/// [`keep_intermediates`](PipelineConfig::keep_intermediates) is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Intermediates {
    /// The preprocessed (downscaled, padded) raster the measurements ran
    /// on
    pub raster: RgbRaster,
    /// The cleaned ink mask produced by segmentation
    pub mask: BinaryMask,
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Per-stroke parameter aggregates, in stroke discovery order
    pub strokes: Vec<StrokeInfo>,
    pub intermediates: Option<Intermediates>,
}

/// The extraction pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Build a pipeline from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] (or a segmentation config
    /// error) if the configuration is structurally invalid.
    pub fn new(config: PipelineConfig) -> ExtractResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build a pipeline with the production defaults.
    pub fn with_defaults() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run on an image file on disk; the format is detected from the
    /// file's magic bytes, not its extension.
    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> ExtractResult<Analysis> {
        let image = read_image(path)?;
        self.run_raster(&image)
    }

    /// Run on an in-memory encoded image (PNG, JPEG, or BMP).
    pub fn run_bytes(&self, bytes: &[u8]) -> ExtractResult<Analysis> {
        let image = decode_image(bytes)?;
        self.run_raster(&image)
    }

    /// Run on an already decoded raster.
    pub fn run_raster(&self, image: &RgbRaster) -> ExtractResult<Analysis> {
        let cfg = &self.config;

        let working = image.downscale(cfg.scale_divisor)?;
        let border = match cfg.border {
            BorderMode::Half => working.height().div_ceil(2),
            BorderMode::None => 0,
        };
        let working = working.add_vertical_border(border, WHITE)?;

        let gray = working.to_gray();
        let hsv = working.to_hsv();
        let seg = segment(&gray, &cfg.segmentation)?;
        let detected = seg.strokes.len();

        let mut strokes = Vec::with_capacity(detected);
        for stroke in &seg.strokes {
            let bounds = stroke.bounds;
            if bounds.is_degenerate() || bounds.width < cfg.sampling.hop {
                continue;
            }

            let points = centerline(&seg.mask, &bounds, &cfg.sampling);
            let samples: Vec<Sample> = points
                .iter()
                .map(|&(x, y)| {
                    let col = (x.round() as usize).min(seg.mask.width() - 1);
                    let row = (y.round() as usize).min(seg.mask.height() - 1);
                    let m = margin(&seg.mask, col, row, cfg.sampling.margin_radius);
                    let f = column_features(&seg.mask, &gray, &hsv, col);
                    Sample {
                        x,
                        y,
                        margin: m,
                        density: f.density,
                        hue: f.hue,
                        saturation: f.saturation,
                        value: f.value,
                    }
                })
                .collect();

            if let Some(info) = assemble(&samples, working.height(), cfg.sampling.margin_radius) {
                strokes.push(info);
            }
        }

        if strokes.is_empty() {
            return Err(ExtractError::NoUsableStrokes(detected));
        }

        let intermediates = cfg.keep_intermediates.then(|| Intermediates {
            raster: working,
            mask: seg.mask,
        });

        Ok(Analysis {
            strokes,
            intermediates,
        })
    }
}
