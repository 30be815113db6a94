//! Inkline - Hand-drawn notation to synthesis parameters
//!
//! Converts raster images of hand-drawn musical notation into
//! time-ordered, per-stroke synthesis parameter sequences.
//!
//! # Overview
//!
//! The pipeline decodes an image (PNG, JPEG, or BMP), reduces it to a
//! working resolution, segments the ink into strokes, samples each
//! stroke's centerline at a fixed hop, and emits named parameter
//! sequences per stroke: pitch, intensity, density, hue, saturation,
//! value, and x position.
//!
//! # Example
//!
//! ```no_run
//! let strokes = inkline::extract_file("notation.png").unwrap();
//! for stroke in &strokes {
//!     println!("{} samples, pitch {:?}...", stroke.sample_count,
//!         &stroke.params.pitch[..1]);
//! }
//! ```
//!
//! For non-default settings build an
//! [`extract::Pipeline`](inkline_extract::Pipeline) directly.

use std::path::Path;

// Re-export core types (data structures used at every stage)
pub use inkline_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use inkline_extract as extract;
pub use inkline_io as io;
pub use inkline_segment as segment;

pub use inkline_extract::{ExtractError, ExtractResult, Pipeline, PipelineConfig};

/// Extract stroke parameters from an encoded image in memory, using the
/// production default configuration.
///
/// # Errors
///
/// Fails if the image cannot be decoded, contains no ink, or yields no
/// usable strokes.
pub fn extract(bytes: &[u8]) -> ExtractResult<Vec<StrokeInfo>> {
    Ok(Pipeline::with_defaults().run_bytes(bytes)?.strokes)
}

/// Extract stroke parameters from an image file, using the production
/// default configuration. The format is detected from the file content.
pub fn extract_file<P: AsRef<Path>>(path: P) -> ExtractResult<Vec<StrokeInfo>> {
    Ok(Pipeline::with_defaults().run_file(path)?.strokes)
}
