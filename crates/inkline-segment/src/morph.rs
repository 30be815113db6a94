//! Grayscale morphology
//!
//! Dilation (max filter) bridges narrow gaps within a stroke and closing
//! (dilation then erosion) seals small holes. The operations run on the
//! gray-valued mask before re-binarization, with square brick
//! structuring elements. Windows clamp to the image: pixels outside the
//! raster do not participate.

use inkline_core::GrayRaster;

/// Dilate with a `size` x `size` brick (running maximum).
///
/// `size` must be odd; 1 returns a copy.
pub fn dilate_brick(src: &GrayRaster, size: usize) -> GrayRaster {
    brick_filter(src, size, true)
}

/// Erode with a `size` x `size` brick (running minimum).
pub fn erode_brick(src: &GrayRaster, size: usize) -> GrayRaster {
    brick_filter(src, size, false)
}

/// Close: dilation followed by erosion with the same brick.
///
/// Fills small holes and connects nearby regions without growing the
/// overall extent beyond the dilation the caller already applied.
pub fn close_brick(src: &GrayRaster, size: usize) -> GrayRaster {
    let dilated = dilate_brick(src, size);
    erode_brick(&dilated, size)
}

fn brick_filter(src: &GrayRaster, size: usize, maximum: bool) -> GrayRaster {
    if size <= 1 {
        return src.clone();
    }
    let half = size / 2;
    let w = src.width();
    let h = src.height();
    let mut out = src.clone();

    for y in 0..h {
        let y0 = y.saturating_sub(half);
        let y1 = (y + half + 1).min(h);
        for x in 0..w {
            let x0 = x.saturating_sub(half);
            let x1 = (x + half + 1).min(w);
            let mut best = src.get(x, y);
            for yy in y0..y1 {
                for xx in x0..x1 {
                    let v = src.get(xx, yy);
                    best = if maximum { best.max(v) } else { best.min(v) };
                }
            }
            out.set(x, y, best);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(w: usize, h: usize, x: usize, y: usize) -> GrayRaster {
        let mut g = GrayRaster::new(w, h).unwrap();
        g.set(x, y, 255);
        g
    }

    #[test]
    fn test_dilate_grows() {
        let src = dot(9, 9, 4, 4);
        let out = dilate_brick(&src, 5);
        assert_eq!(out.get(2, 2), 255);
        assert_eq!(out.get(6, 6), 255);
        assert_eq!(out.get(7, 4), 0);
    }

    #[test]
    fn test_erode_shrinks() {
        let mut src = GrayRaster::new(9, 9).unwrap();
        for y in 2..7 {
            for x in 2..7 {
                src.set(x, y, 255);
            }
        }
        let out = erode_brick(&src, 3);
        assert_eq!(out.get(4, 4), 255);
        assert_eq!(out.get(2, 2), 0);
        assert_eq!(out.get(3, 3), 255);
    }

    #[test]
    fn test_close_bridges_gap() {
        // Two blocks separated by a 2-px gap merge under a 5x5 close
        let mut src = GrayRaster::new(16, 7).unwrap();
        for y in 2..5 {
            for x in 2..6 {
                src.set(x, y, 255);
            }
            for x in 8..12 {
                src.set(x, y, 255);
            }
        }
        let out = close_brick(&src, 5);
        assert_eq!(out.get(6, 3), 255);
        assert_eq!(out.get(7, 3), 255);
    }

    #[test]
    fn test_close_extensive() {
        let src = dot(9, 9, 4, 4);
        let out = close_brick(&src, 3);
        // Closing never removes existing foreground
        assert_eq!(out.get(4, 4), 255);
    }

    #[test]
    fn test_size_one_is_identity() {
        let src = dot(5, 5, 2, 2);
        assert_eq!(dilate_brick(&src, 1), src);
        assert_eq!(erode_brick(&src, 1), src);
    }
}
