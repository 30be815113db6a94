//! Parameter sequence assembly
//!
//! Converts the raw per-sample measurements of one stroke into the
//! normalized, named sequences of [`StrokeParams`] and wraps them in a
//! [`StrokeInfo`]. All normalization conventions live here:
//!
//! - pitch maps the vertical centerline position linearly onto
//!   [`PITCH_RANGE`], top of the raster at the high end
//! - intensity is the margin divided by the margin search radius
//! - density, hue, saturation, and value arrive already normalized from
//!   feature measurement and pass through unchanged
//! - x position stays absolute in the preprocessed raster

use inkline_core::{Sample, StrokeInfo, StrokeParams};

/// Output range of the pitch channel, `(bottom, top)` of the raster.
pub const PITCH_RANGE: (f64, f64) = (-1.0, 1.0);

/// Map a vertical raster position to pitch.
///
/// y = 0 (top row) maps to the high end of [`PITCH_RANGE`], y = height
/// to the low end.
#[inline]
pub fn pitch_of(y: f64, raster_height: usize) -> f64 {
    let (bottom, top) = PITCH_RANGE;
    top + y / raster_height as f64 * (bottom - top)
}

/// Build the aggregate for one stroke from its samples.
///
/// Returns `None` for an empty sample list; such strokes are skipped by
/// the pipeline rather than reported as zero-length sequences.
pub fn assemble(
    samples: &[Sample],
    raster_height: usize,
    margin_radius: u32,
) -> Option<StrokeInfo> {
    let first = samples.first()?;
    let last = samples.last()?;

    let n = samples.len();
    let mut params = StrokeParams {
        pitch: Vec::with_capacity(n),
        intensity: Vec::with_capacity(n),
        density: Vec::with_capacity(n),
        hue: Vec::with_capacity(n),
        saturation: Vec::with_capacity(n),
        value: Vec::with_capacity(n),
        x_position: Vec::with_capacity(n),
    };

    for s in samples {
        params.pitch.push(pitch_of(s.y, raster_height));
        params.intensity.push(f64::from(s.margin) / f64::from(margin_radius));
        params.density.push(s.density);
        params.hue.push(s.hue);
        params.saturation.push(s.saturation);
        params.value.push(s.value);
        params.x_position.push(s.x);
    }

    Some(StrokeInfo {
        sample_count: n,
        start: (first.x, first.y),
        end: (last.x, last.y),
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, y: f64, margin: u32) -> Sample {
        Sample {
            x,
            y,
            margin,
            density: 0.5,
            hue: 0.25,
            saturation: 0.75,
            value: 0.9,
        }
    }

    #[test]
    fn test_pitch_endpoints() {
        assert_eq!(pitch_of(0.0, 100), 1.0);
        assert_eq!(pitch_of(100.0, 100), -1.0);
        assert_eq!(pitch_of(50.0, 100), 0.0);
    }

    #[test]
    fn test_pitch_monotone_decreasing_in_y() {
        let a = pitch_of(10.0, 80);
        let b = pitch_of(60.0, 80);
        assert!(a > b);
    }

    #[test]
    fn test_assemble_lengths_and_endpoints() {
        let samples: Vec<Sample> = (0..5)
            .map(|i| sample(1.5 + 3.0 * i as f64, 20.0, 10))
            .collect();
        let info = assemble(&samples, 60, 30).unwrap();
        assert_eq!(info.sample_count, 5);
        assert_eq!(info.start, (1.5, 20.0));
        assert_eq!(info.end, (13.5, 20.0));
        for (_, seq) in info.params.named() {
            assert_eq!(seq.len(), 5);
        }
    }

    #[test]
    fn test_intensity_normalization() {
        let samples = [sample(0.0, 0.0, 10), sample(3.0, 0.0, 30), sample(6.0, 0.0, 45)];
        let info = assemble(&samples, 40, 30).unwrap();
        assert!((info.params.intensity[0] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(info.params.intensity[1], 1.0);
        assert_eq!(info.params.intensity[2], 1.5);
    }

    #[test]
    fn test_passthrough_channels() {
        let info = assemble(&[sample(2.0, 10.0, 0)], 20, 30).unwrap();
        assert_eq!(info.params.density[0], 0.5);
        assert_eq!(info.params.hue[0], 0.25);
        assert_eq!(info.params.saturation[0], 0.75);
        assert_eq!(info.params.value[0], 0.9);
        assert_eq!(info.params.x_position[0], 2.0);
    }

    #[test]
    fn test_empty_samples_yield_none() {
        assert!(assemble(&[], 10, 30).is_none());
    }
}
