//! Sample and stroke parameter records
//!
//! [`Sample`] is one per-hop measurement along a stroke's centerline.
//! [`StrokeParams`] packages a whole stroke's measurements as named,
//! equal-length sequences ready for synthesis control; [`StrokeInfo`]
//! wraps the sequences with the stroke's endpoints and sample count.
//!
//! `StrokeParams` is a fixed-shape record built in one pass once every
//! sample for a stroke is known, so no partially populated intermediate
//! is ever observable.

/// One centerline measurement point.
///
/// Constructed once per hop slice and never mutated afterwards.
/// Coordinates are absolute positions in the preprocessed raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Horizontal center of the measured column
    pub x: f64,
    /// Vertical centerline position
    pub y: f64,
    /// Bounded distance to background, a local thickness proxy
    pub margin: u32,
    /// Ink density in [0, 1]
    pub density: f64,
    /// Normalized hue in [0, 1]
    pub hue: f64,
    /// Normalized saturation in [0, 1]
    pub saturation: f64,
    /// Normalized value in [0, 1]
    pub value: f64,
}

/// Named parameter sequences for one stroke, all of equal length.
///
/// Normalization conventions:
///
/// - `pitch`: vertical position mapped linearly onto [-1, 1], top of the
///   raster at +1, bottom at -1
/// - `intensity`: margin divided by the margin search radius, roughly
///   [0, 2] (two saturated half-scans), near [0, 1] in practice
/// - `density`, `hue`, `saturation`, `value`: [0, 1]
/// - `x_position`: absolute x in the preprocessed raster
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokeParams {
    pub pitch: Vec<f64>,
    pub intensity: Vec<f64>,
    pub density: Vec<f64>,
    pub hue: Vec<f64>,
    pub saturation: Vec<f64>,
    pub value: Vec<f64>,
    pub x_position: Vec<f64>,
}

impl StrokeParams {
    /// Number of samples; all sequences share this length.
    pub fn len(&self) -> usize {
        self.x_position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_position.is_empty()
    }

    /// Iterate the sequences with their wire names.
    pub fn named(&self) -> [(&'static str, &[f64]); 7] {
        [
            ("pitch", &self.pitch),
            ("intensity", &self.intensity),
            ("density", &self.density),
            ("hue", &self.hue),
            ("saturation", &self.saturation),
            ("value", &self.value),
            ("x_position", &self.x_position),
        ]
    }
}

/// The externally visible aggregate for one stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeInfo {
    /// Number of samples; equals the length of every parameter sequence
    pub sample_count: usize,
    /// Coordinates of the first (leftmost) sample
    pub start: (f64, f64),
    /// Coordinates of the last (rightmost) sample
    pub end: (f64, f64),
    /// The parameter sequences, ordered left to right
    pub params: StrokeParams,
}
