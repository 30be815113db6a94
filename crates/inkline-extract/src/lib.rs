//! Inkline Extract - Per-stroke parameter extraction
//!
//! Turns a decoded notation image into time-ordered synthesis parameter
//! sequences, one set per detected stroke:
//!
//! 1. preprocess: integer downscale plus optional white vertical padding
//! 2. segment: binarize, denoise, and trace strokes (inkline-segment)
//! 3. sample: locate the ink centerline per hop slice
//! 4. measure: margin, density, and column color per sample
//! 5. assemble: normalize into named parameter sequences
//!
//! The entry point is [`Pipeline`]; [`PipelineConfig`] carries every
//! tunable with production defaults.

pub mod assembler;
pub mod config;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod sampler;

pub use assembler::PITCH_RANGE;
pub use config::{BorderMode, PipelineConfig, SamplingConfig, SamplingStrategy};
pub use error::{ExtractError, ExtractResult};
pub use pipeline::{Analysis, Intermediates, Pipeline};
