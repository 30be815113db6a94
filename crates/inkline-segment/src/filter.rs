//! Denoising filters
//!
//! A small-aperture median filter removes speckle noise from the
//! thresholded mask, and a fixed 5x5 Gaussian (binomial) smoothing pass
//! softens stroke boundaries ahead of morphology. Window filters clamp
//! to the image: out-of-bounds neighbors are excluded and, for the
//! Gaussian, the kernel weight is renormalized over the in-bounds part.

use inkline_core::GrayRaster;

/// Binomial approximation of a Gaussian, applied separably.
const GAUSS_KERNEL: [u32; 5] = [1, 4, 6, 4, 1];

/// Median filter with a square aperture.
///
/// `aperture` must be odd; an aperture of 0 or 1 returns a copy.
pub fn median_filter(src: &GrayRaster, aperture: usize) -> GrayRaster {
    if aperture <= 1 {
        return src.clone();
    }
    let half = aperture / 2;
    let w = src.width();
    let h = src.height();
    let mut out = src.clone();
    let mut window = Vec::with_capacity(aperture * aperture);

    for y in 0..h {
        for x in 0..w {
            window.clear();
            let y0 = y.saturating_sub(half);
            let y1 = (y + half + 1).min(h);
            let x0 = x.saturating_sub(half);
            let x1 = (x + half + 1).min(w);
            for yy in y0..y1 {
                for xx in x0..x1 {
                    window.push(src.get(xx, yy));
                }
            }
            window.sort_unstable();
            out.set(x, y, window[window.len() / 2]);
        }
    }
    out
}

/// 5x5 Gaussian smoothing via two separable 1-D passes.
pub fn gaussian_smooth_5x5(src: &GrayRaster) -> GrayRaster {
    let horizontal = gaussian_pass(src, true);
    gaussian_pass(&horizontal, false)
}

fn gaussian_pass(src: &GrayRaster, horizontal: bool) -> GrayRaster {
    let w = src.width() as isize;
    let h = src.height() as isize;
    let mut out = src.clone();

    for y in 0..h {
        for x in 0..w {
            let mut acc = 0u32;
            let mut weight = 0u32;
            for (i, &k) in GAUSS_KERNEL.iter().enumerate() {
                let offset = i as isize - 2;
                let (sx, sy) = if horizontal {
                    (x + offset, y)
                } else {
                    (x, y + offset)
                };
                if sx < 0 || sx >= w || sy < 0 || sy >= h {
                    continue;
                }
                acc += k * src.get(sx as usize, sy as usize) as u32;
                weight += k;
            }
            out.set(x as usize, y as usize, ((acc + weight / 2) / weight) as u8);
        }
    }
    out
}
