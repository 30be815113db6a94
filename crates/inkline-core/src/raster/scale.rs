//! Integer-factor downsampling
//!
//! The preprocessor reduces the decoded image to a working resolution by
//! an integer divisor (2 or 4 depending on pipeline version). Box
//! averaging over divisor-sized blocks keeps the result deterministic
//! and anti-aliased.

use super::RgbRaster;
use crate::error::{CoreError, CoreResult};

impl RgbRaster {
    /// Downscale by an integer divisor using box averaging.
    ///
    /// Output dimensions are `max(1, dim / divisor)`; a source smaller
    /// than the divisor collapses to a single averaged pixel row or
    /// column rather than vanishing. `divisor == 1` returns a copy.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidParameter`] if `divisor` is 0.
    pub fn downscale(&self, divisor: usize) -> CoreResult<RgbRaster> {
        if divisor == 0 {
            return Err(CoreError::InvalidParameter("scale divisor must be >= 1"));
        }
        if divisor == 1 {
            return Ok(self.clone());
        }

        let out_w = (self.width() / divisor).max(1);
        let out_h = (self.height() / divisor).max(1);
        let mut out = RgbRaster::new_filled(out_w, out_h, (0, 0, 0))?;

        for oy in 0..out_h {
            for ox in 0..out_w {
                let x0 = ox * divisor;
                let y0 = oy * divisor;
                let x1 = (x0 + divisor).min(self.width());
                let y1 = (y0 + divisor).min(self.height());

                let mut sum = [0u32; 3];
                let mut count = 0u32;
                for y in y0..y1 {
                    for x in x0..x1 {
                        let (r, g, b) = self.get(x, y);
                        sum[0] += r as u32;
                        sum[1] += g as u32;
                        sum[2] += b as u32;
                        count += 1;
                    }
                }
                // Block is never empty: x0 < width and y0 < height by
                // construction of out_w/out_h.
                out.set(
                    ox,
                    oy,
                    (
                        ((sum[0] + count / 2) / count) as u8,
                        ((sum[1] + count / 2) / count) as u8,
                        ((sum[2] + count / 2) / count) as u8,
                    ),
                );
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downscale_dims() {
        let r = RgbRaster::new_filled(400, 100, (255, 255, 255)).unwrap();
        let s = r.downscale(4).unwrap();
        assert_eq!((s.width(), s.height()), (100, 25));
    }

    #[test]
    fn test_downscale_identity() {
        let r = RgbRaster::new_filled(7, 5, (1, 2, 3)).unwrap();
        let s = r.downscale(1).unwrap();
        assert_eq!(s, r);
    }

    #[test]
    fn test_downscale_averages_blocks() {
        // 2x2 checkerboard of black and white averages to mid gray
        let mut r = RgbRaster::new_filled(2, 2, (0, 0, 0)).unwrap();
        r.set(0, 0, (255, 255, 255));
        r.set(1, 1, (255, 255, 255));
        let s = r.downscale(2).unwrap();
        assert_eq!((s.width(), s.height()), (1, 1));
        let (g, _, _) = s.get(0, 0);
        assert!((127..=128).contains(&g));
    }

    #[test]
    fn test_downscale_tiny_source_survives() {
        let r = RgbRaster::new_filled(3, 2, (9, 9, 9)).unwrap();
        let s = r.downscale(4).unwrap();
        assert_eq!((s.width(), s.height()), (1, 1));
        assert_eq!(s.get(0, 0), (9, 9, 9));
    }

    #[test]
    fn test_downscale_zero_divisor_rejected() {
        let r = RgbRaster::new_filled(4, 4, (0, 0, 0)).unwrap();
        assert!(r.downscale(0).is_err());
    }
}
