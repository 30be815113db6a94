//! Color conversion primitives
//!
//! Scalar RGB -> grayscale and RGB -> HSV conversions used to derive the
//! analysis rasters from a decoded color image.
//!
//! # HSV convention
//!
//! Hue is stored in [0, 240) where 240 wraps to 0; saturation and value
//! are in [0, 255]. Hue landmarks:
//!
//! - 0: red
//! - 40: yellow
//! - 80: green
//! - 120: cyan
//! - 160: blue
//! - 200: magenta
//!
//! Normalization to [0, 1] (hue / 240, s / 255, v / 255) is the parameter
//! assembler's job, not this module's.

/// Upper bound (exclusive) of the stored hue range.
pub const HUE_RANGE: u32 = 240;

/// HSV color values.
///
/// Ranges: h [0..239] (h=240 wraps to 0), s [0..255], v [0..255].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert RGB to 8-bit luma using ITU-R BT.601 coefficients.
///
/// gray = 0.299*R + 0.587*G + 0.114*B, rounded.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    ((y + 500) / 1000) as u8
}

/// Convert RGB to HSV color space.
///
/// Achromatic input (delta = 0) maps to h = 0, s = 0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let ri = r as i32;
    let gi = g as i32;
    let bi = b as i32;

    let min = ri.min(gi).min(bi);
    let max = ri.max(gi).max(bi);
    let delta = max - min;

    let v = max as u8;
    if delta == 0 {
        return Hsv { h: 0, s: 0, v };
    }

    let s = (255.0 * delta as f32 / max as f32 + 0.5) as u8;
    let h_raw = if ri == max {
        (gi - bi) as f32 / delta as f32
    } else if gi == max {
        2.0 + (bi - ri) as f32 / delta as f32
    } else {
        4.0 + (ri - gi) as f32 / delta as f32
    };

    let mut h = h_raw * 40.0;
    if h < 0.0 {
        h += 240.0;
    }
    if h >= 239.5 {
        h = 0.0;
    }

    Hsv {
        h: (h + 0.5) as u8,
        s,
        v,
    }
}
