//! Inkline Segment - Stroke segmentation
//!
//! Turns the grayscale raster into a cleaned binary ink mask and a set
//! of candidate strokes (external contours of connected ink regions):
//!
//! 1. inverted binary threshold (dark ink becomes foreground)
//! 2. small-aperture median filter (speckle removal)
//! 3. 5x5 Gaussian smoothing
//! 4. brick dilation (bridges narrow gaps within a stroke)
//! 5. morphological closing (seals small holes)
//! 6. re-binarization into the final 0/255 mask
//! 7. external contour extraction
//!
//! All steps are deterministic. The entry point is [`segment`].

pub mod config;
pub mod contour;
pub mod error;
pub mod filter;
pub mod morph;
pub mod segmenter;
pub mod threshold;

pub use config::SegmentationConfig;
pub use contour::{Stroke, find_strokes};
pub use error::{SegmentError, SegmentResult};
pub use segmenter::{Segmentation, segment};
