//! Error types for inkline-segment

use thiserror::Error;

/// Errors that can occur during stroke segmentation
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] inkline_core::CoreError),

    /// Segmentation produced zero contours; the page is blank or the
    /// threshold removed everything. Treated as invalid input, not an
    /// empty result.
    #[error("no strokes found in the image")]
    NoStrokesFound,

    /// Invalid configuration value
    #[error("invalid segmentation config: {0}")]
    InvalidConfig(&'static str),
}

/// Result type for segmentation operations
pub type SegmentResult<T> = Result<T, SegmentError>;
