//! Colorimetric raster derivations
//!
//! Converts the decoded RGB raster into the grayscale and HSV planes the
//! segmenter and feature extractor consume. Both derivations preserve
//! dimensions exactly.

use super::{GrayRaster, HsvRaster, RgbRaster};
use crate::color;

impl RgbRaster {
    /// Derive the 8-bit grayscale plane (BT.601 luma).
    pub fn to_gray(&self) -> GrayRaster {
        let mut data = Vec::with_capacity(self.width() * self.height());
        for px in self.data().chunks_exact(3) {
            data.push(color::luma(px[0], px[1], px[2]));
        }
        GrayRaster {
            width: self.width(),
            height: self.height(),
            data,
        }
    }

    /// Derive the HSV plane.
    ///
    /// Channel ranges follow [`crate::color`]: h in [0, 240), s and v in
    /// [0, 255].
    pub fn to_hsv(&self) -> HsvRaster {
        let mut data = Vec::with_capacity(self.width() * self.height() * 3);
        for px in self.data().chunks_exact(3) {
            let hsv = color::rgb_to_hsv(px[0], px[1], px[2]);
            data.push(hsv.h);
            data.push(hsv.s);
            data.push(hsv.v);
        }
        HsvRaster::from_parts(self.width(), self.height(), data)
    }
}
