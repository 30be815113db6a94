//! Per-sample feature measurement
//!
//! For each centerline point this module measures:
//!
//! - margin: a bounded four-direction probe from the centerline pixel to
//!   the nearest background in the cleaned mask, taken as the smaller of
//!   the horizontal and vertical extents
//! - density: mean inverted gray intensity over the masked pixels of the
//!   sample's column
//! - hue / saturation / value: inverted-gray-weighted channel means over
//!   the full column, so ink-free rows contribute (almost) nothing

use inkline_core::{BinaryMask, GrayRaster, HsvRaster, HUE_RANGE};

/// Guard against division by a zero pixel count or weight sum.
const EPS: f64 = 1e-6;

/// Color and density measurements for one sample column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnFeatures {
    /// Mean inverted intensity of masked pixels, in [0, 1]
    pub density: f64,
    /// Weighted mean hue, normalized to [0, 1]
    pub hue: f64,
    /// Weighted mean saturation, normalized to [0, 1]
    pub saturation: f64,
    /// Weighted mean value, normalized to [0, 1]
    pub value: f64,
}

/// Local ink thickness at a mask pixel.
///
/// Scans left, right, up, and down from `(x, y)` for the nearest
/// background pixel, each scan bounded by `radius`, and returns the
/// smaller of the horizontal and vertical totals. A background starting
/// pixel yields 0. A scan that leaves the raster or exhausts the radius
/// without meeting background reports the full radius, so a stroke flush
/// with an unpadded edge and a heavily blotted region both read as
/// "thick".
pub fn margin(mask: &BinaryMask, x: usize, y: usize, radius: u32) -> u32 {
    if !mask.is_ink(x, y) {
        return 0;
    }

    let left = scan(mask, x, y, radius, -1, 0);
    let right = scan(mask, x, y, radius, 1, 0);
    let up = scan(mask, x, y, radius, 0, -1);
    let down = scan(mask, x, y, radius, 0, 1);

    (left + right).min(up + down)
}

/// Distance to the first background pixel along one axis direction,
/// counting that pixel; `radius` when none is met within the raster.
fn scan(mask: &BinaryMask, x: usize, y: usize, radius: u32, dx: i64, dy: i64) -> u32 {
    for step in 1..=radius {
        let sx = x as i64 + dx * i64::from(step);
        let sy = y as i64 + dy * i64::from(step);
        if sx < 0 || sy < 0 || sx >= mask.width() as i64 || sy >= mask.height() as i64 {
            return radius;
        }
        if !mask.is_ink(sx as usize, sy as usize) {
            return step;
        }
    }
    radius
}

/// Measure density and color for the column at `x`.
pub fn column_features(
    mask: &BinaryMask,
    gray: &GrayRaster,
    hsv: &HsvRaster,
    x: usize,
) -> ColumnFeatures {
    let height = mask.height();

    let mut ink_sum = 0.0;
    let mut ink_count = 0.0;
    let mut weight_sum = 0.0;
    let mut h_sum = 0.0;
    let mut s_sum = 0.0;
    let mut v_sum = 0.0;

    for y in 0..height {
        let inverted = f64::from(255 - gray.get(x, y));

        if mask.is_ink(x, y) {
            ink_sum += inverted;
            ink_count += 1.0;
        }

        let px = hsv.get(x, y);
        weight_sum += inverted;
        h_sum += inverted * f64::from(px.h);
        s_sum += inverted * f64::from(px.s);
        v_sum += inverted * f64::from(px.v);
    }

    ColumnFeatures {
        density: ink_sum / (ink_count + EPS) / 255.0,
        hue: h_sum / (weight_sum + EPS) / f64::from(HUE_RANGE),
        saturation: s_sum / (weight_sum + EPS) / 255.0,
        value: v_sum / (weight_sum + EPS) / 255.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkline_core::{BinaryMask, RgbRaster};

    fn square_mask(size: usize, canvas: usize) -> BinaryMask {
        let mut m = BinaryMask::new(canvas, canvas).unwrap();
        let off = (canvas - size) / 2;
        for y in off..off + size {
            for x in off..off + size {
                m.set_ink(x, y);
            }
        }
        m
    }

    #[test]
    fn test_margin_center_of_square() {
        // 11x11 square centered on a 31x31 canvas: background is 6 away
        // in every direction
        let m = square_mask(11, 31);
        assert_eq!(margin(&m, 15, 15, 30), 12);
    }

    #[test]
    fn test_margin_off_ink_is_zero() {
        let m = square_mask(5, 21);
        assert_eq!(margin(&m, 0, 0, 30), 0);
    }

    #[test]
    fn test_margin_saturates_inside_blot() {
        let mut m = BinaryMask::new(100, 9).unwrap();
        for x in 0..100 {
            for y in 0..9 {
                m.set_ink(x, y);
            }
        }
        // No background within reach in any direction: every scan
        // reports the full radius
        assert_eq!(margin(&m, 50, 4, 3), 6);
        assert_eq!(margin(&m, 50, 4, 30), 60);
    }

    #[test]
    fn test_margin_edge_flush_scan_saturates() {
        // Three ink columns flush with the left image edge: the
        // leftward scan leaves the raster and reports the radius, not
        // the steps walked
        let mut m = BinaryMask::new(40, 40).unwrap();
        for y in 0..40 {
            for x in 0..3 {
                m.set_ink(x, y);
            }
        }
        // left 30 (off-image) + right 3 (background at x=3) = 33 beats
        // the doubly saturated vertical scan
        assert_eq!(margin(&m, 0, 20, 30), 33);
    }

    #[test]
    fn test_margin_asymmetric_near_edge() {
        let m = square_mask(5, 21);
        // Top-left corner pixel of the square: background is adjacent
        // above and left, 5 away below and right
        assert_eq!(margin(&m, 8, 8, 30), 6);
    }

    #[test]
    fn test_density_of_solid_black_column() {
        let rgb = RgbRaster::new_filled(3, 10, (0, 0, 0)).unwrap();
        let gray = rgb.to_gray();
        let hsv = rgb.to_hsv();
        let mut mask = BinaryMask::new(3, 10).unwrap();
        for y in 0..10 {
            mask.set_ink(1, y);
        }
        let f = column_features(&mask, &gray, &hsv, 1);
        assert!((f.density - 1.0).abs() < 1e-3);
        // Black has zero saturation and zero value
        assert!(f.saturation < 1e-3);
        assert!(f.value < 1e-3);
    }

    #[test]
    fn test_white_column_features_near_zero() {
        let rgb = RgbRaster::new_filled(3, 10, (255, 255, 255)).unwrap();
        let gray = rgb.to_gray();
        let hsv = rgb.to_hsv();
        let mask = BinaryMask::new(3, 10).unwrap();
        let f = column_features(&mask, &gray, &hsv, 1);
        // No ink and no weight: everything collapses to zero instead of
        // dividing by zero
        assert_eq!(f.density, 0.0);
        assert_eq!(f.hue, 0.0);
        assert_eq!(f.saturation, 0.0);
        assert_eq!(f.value, 0.0);
    }

    #[test]
    fn test_colored_ink_dominates_column_means() {
        // Saturated blue band on a white page
        let mut rgb = RgbRaster::new_filled(3, 20, (255, 255, 255)).unwrap();
        let mut data = rgb.data().to_vec();
        for y in 8..12 {
            for x in 0..3 {
                let i = (y * 3 + x) * 3;
                data[i] = 0;
                data[i + 1] = 0;
                data[i + 2] = 255;
            }
        }
        rgb = RgbRaster::from_vec(3, 20, data).unwrap();
        let gray = rgb.to_gray();
        let hsv = rgb.to_hsv();
        let mut mask = BinaryMask::new(3, 20).unwrap();
        for y in 8..12 {
            mask.set_ink(1, y);
        }

        let f = column_features(&mask, &gray, &hsv, 1);
        // Blue sits at 160 on the 240-step hue wheel
        assert!((f.hue - 160.0 / 240.0).abs() < 0.02);
        assert!(f.saturation > 0.9);
        assert!(f.value > 0.9);
    }
}
