//! Error types for inkline-extract

use thiserror::Error;

/// Errors that can occur while extracting stroke parameters
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Image decoding failed
    #[error("decode error: {0}")]
    Io(#[from] inkline_io::IoError),

    /// Segmentation failed (including the blank-page case)
    #[error("segmentation error: {0}")]
    Segment(#[from] inkline_segment::SegmentError),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] inkline_core::CoreError),

    /// Invalid sampling or pipeline configuration
    #[error("invalid extraction config: {0}")]
    InvalidConfig(&'static str),

    /// Every detected stroke was degenerate (zero-size bounding box or
    /// narrower than one hop), so no parameters could be produced.
    /// Reported instead of an empty success.
    #[error("no usable strokes: all {0} detected strokes were degenerate")]
    NoUsableStrokes(usize),
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
