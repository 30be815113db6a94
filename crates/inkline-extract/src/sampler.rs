//! Stroke centerline sampling
//!
//! Partitions a stroke's horizontal bounding span into fixed-width hop
//! slices and locates the ink centerline per slice with a two-stage
//! center-of-mass search:
//!
//! 1. the ink-weighted horizontal center of the full-height mask band
//!    under the slice (fallback: slice midpoint);
//! 2. within the single mask column nearest that center, the midpoint of
//!    the largest connected vertical run of foreground pixels
//!    (fallback: column midpoint).
//!
//! Restricting stage 2 to the dominant connected run keeps stray noise
//! pixels elsewhere in the column from dragging the centerline.

use crate::config::{SamplingConfig, SamplingStrategy};
use inkline_core::{BinaryMask, Rect};

/// Measure a stroke's centerline with the configured strategy.
///
/// Points come back in slice order, so their x coordinates increase
/// monotonically; every x lies within the stroke's bounding span.
pub fn centerline(mask: &BinaryMask, bounds: &Rect, config: &SamplingConfig) -> Vec<(f64, f64)> {
    match config.strategy {
        SamplingStrategy::DirectCenterline => direct_centerline(mask, bounds, config.hop),
        SamplingStrategy::RotatedWindow => {
            rotated_window_centerline(mask, bounds, config.hop, config.margin_radius)
        }
    }
}

/// Direct per-slice centerline measurement.
pub fn direct_centerline(mask: &BinaryMask, bounds: &Rect, hop: usize) -> Vec<(f64, f64)> {
    let n = bounds.width / hop;
    let mut points = Vec::with_capacity(n);

    for i in 0..n {
        let left = bounds.left + i * hop;
        let right = left + hop;

        let cx =
            band_center_x(mask, left, right).unwrap_or(left as f64 + hop as f64 / 2.0);
        let column = (cx as usize).min(mask.width() - 1);
        let cy = column_center_y(mask, column).unwrap_or(mask.height() as f64 / 2.0);

        points.push((cx, cy));
    }

    points
}

/// Orientation-corrected centerline: measure direct points first, then
/// re-center each one along the normal to the locally fitted stroke
/// direction. The slice's x is kept so sample ordering stays monotonic;
/// only the vertical estimate moves.
pub fn rotated_window_centerline(
    mask: &BinaryMask,
    bounds: &Rect,
    hop: usize,
    radius: u32,
) -> Vec<(f64, f64)> {
    let direct = direct_centerline(mask, bounds, hop);

    direct
        .iter()
        .enumerate()
        .map(|(i, &(cx, cy))| {
            let slope = local_slope(&direct, i);
            // Unit normal to the direction (1, slope)
            let len = (1.0 + slope * slope).sqrt();
            let (nx, ny) = (-slope / len, 1.0 / len);

            match normal_run_center(mask, cx, cy, nx, ny, radius) {
                Some(t) => (cx, cy + ny * t),
                None => (cx, cy),
            }
        })
        .collect()
}

/// Ink-weighted horizontal center of mass of the full-height band
/// `[left, right)`. `None` when the band holds no ink.
fn band_center_x(mask: &BinaryMask, left: usize, right: usize) -> Option<f64> {
    let mut sum = 0u64;
    let mut count = 0u64;
    for y in 0..mask.height() {
        for x in left..right.min(mask.width()) {
            if mask.is_ink(x, y) {
                sum += x as u64;
                count += 1;
            }
        }
    }
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Midpoint of the largest connected vertical foreground run in one
/// column. `None` when the column holds no ink.
fn column_center_y(mask: &BinaryMask, x: usize) -> Option<f64> {
    largest_run(mask, x).map(|(start, len)| start as f64 + (len as f64 - 1.0) / 2.0)
}

/// Largest connected vertical run of foreground in a column, as
/// `(start_row, length)`. Ties keep the topmost run.
pub fn largest_run(mask: &BinaryMask, x: usize) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut current: Option<(usize, usize)> = None;

    for y in 0..mask.height() {
        if mask.is_ink(x, y) {
            current = match current {
                Some((start, len)) => Some((start, len + 1)),
                None => Some((y, 1)),
            };
        } else if let Some(run) = current.take()
            && best.is_none_or(|(_, blen)| run.1 > blen)
        {
            best = Some(run);
        }
    }
    if let Some(run) = current
        && best.is_none_or(|(_, blen)| run.1 > blen)
    {
        best = Some(run);
    }
    best
}

/// Center offset of the contiguous ink run crossing `(cx, cy)` along the
/// normal direction, bounded by `radius` steps each way. `None` when the
/// anchor pixel itself is background.
fn normal_run_center(
    mask: &BinaryMask,
    cx: f64,
    cy: f64,
    nx: f64,
    ny: f64,
    radius: u32,
) -> Option<f64> {
    let ink_at = |t: f64| -> bool {
        let x = (cx + nx * t).round();
        let y = (cy + ny * t).round();
        x >= 0.0
            && y >= 0.0
            && (x as usize) < mask.width()
            && (y as usize) < mask.height()
            && mask.is_ink(x as usize, y as usize)
    };

    if !ink_at(0.0) {
        return None;
    }

    let mut t_max = 0.0;
    for step in 1..=radius {
        let t = step as f64;
        if !ink_at(t) {
            break;
        }
        t_max = t;
    }
    let mut t_min = 0.0;
    for step in 1..=radius {
        let t = -(step as f64);
        if !ink_at(t) {
            break;
        }
        t_min = t;
    }

    Some((t_min + t_max) / 2.0)
}

/// Least-squares slope of the centerline in a +-2 point window around
/// `i`; 0 for windows too short to fit.
fn local_slope(points: &[(f64, f64)], i: usize) -> f64 {
    let lo = i.saturating_sub(2);
    let hi = (i + 3).min(points.len());
    let window = &points[lo..hi];
    if window.len() < 2 {
        return 0.0;
    }

    let n = window.len() as f64;
    let mean_x = window.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = window.iter().map(|p| p.1).sum::<f64>() / n;
    let mut num = 0.0;
    let mut den = 0.0;
    for &(x, y) in window {
        num += (x - mean_x) * (y - mean_y);
        den += (x - mean_x) * (x - mean_x);
    }
    if den.abs() < f64::EPSILON { 0.0 } else { num / den }
}
