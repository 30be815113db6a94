//! Raster containers
//!
//! Row-major, `Vec`-backed pixel planes derived from one decoded source
//! image:
//!
//! - [`RgbRaster`] - interleaved RGB triples (the decoded image)
//! - [`GrayRaster`] - single-channel 8-bit intensity
//! - [`HsvRaster`] - interleaved HSV triples (see [`crate::color`] for
//!   the channel convention)
//! - [`BinaryMask`] - 0/255 ink mask produced by segmentation
//!
//! All planes derived from one source share identical dimensions and are
//! read-only once produced; later pipeline stages receive them by
//! reference.

mod border;
mod convert;
mod scale;

use crate::color::Hsv;
use crate::error::{CoreError, CoreResult};

/// Interleaved 8-bit RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbRaster {
    /// Create a raster filled with a uniform color.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if either dimension is 0.
    pub fn new_filled(width: usize, height: usize, color: (u8, u8, u8)) -> CoreResult<Self> {
        check_dims(width, height)?;
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.push(color.0);
            data.push(color.1);
            data.push(color.2);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing interleaved RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SizeMismatch`] if `data.len()` is not
    /// `width * height * 3`.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> CoreResult<Self> {
        check_dims(width, height)?;
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(CoreError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one pixel. Caller must stay in bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let i = (y * self.width + x) * 3;
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, color: (u8, u8, u8)) {
        let i = (y * self.width + x) * 3;
        self.data[i] = color.0;
        self.data[i + 1] = color.1;
        self.data[i + 2] = color.2;
    }
}

/// Single-channel 8-bit image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayRaster {
    /// Create a zero-filled grayscale raster.
    pub fn new(width: usize, height: usize) -> CoreResult<Self> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; width * height],
        })
    }

    /// Wrap an existing single-channel buffer.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> CoreResult<Self> {
        check_dims(width, height)?;
        let expected = width * height;
        if data.len() != expected {
            return Err(CoreError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.data[y * self.width + x] = value;
    }
}

/// Interleaved HSV image; channel ranges per [`crate::color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl HsvRaster {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read one HSV pixel. Caller must stay in bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Hsv {
        let i = (y * self.width + x) * 3;
        Hsv {
            h: self.data[i],
            s: self.data[i + 1],
            v: self.data[i + 2],
        }
    }

    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * 3);
        Self {
            width,
            height,
            data,
        }
    }
}

/// Binary ink mask: 255 marks foreground (ink), 0 background.
///
/// Same dimensions as the rasters it was derived from; immutable to
/// downstream consumers once segmentation has produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryMask {
    /// Create an all-background mask.
    pub fn new(width: usize, height: usize) -> CoreResult<Self> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the pixel is foreground (ink).
    #[inline]
    pub fn is_ink(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    /// Mark a pixel as foreground.
    #[inline]
    pub fn set_ink(&mut self, x: usize, y: usize) {
        self.data[y * self.width + x] = 255;
    }

    /// Number of foreground pixels.
    pub fn count_ink(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

fn check_dims(width: usize, height: usize) -> CoreResult<()> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_filled() {
        let r = RgbRaster::new_filled(4, 3, (10, 20, 30)).unwrap();
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 3);
        assert_eq!(r.get(3, 2), (10, 20, 30));
    }

    #[test]
    fn test_zero_dims_rejected() {
        assert!(RgbRaster::new_filled(0, 3, (0, 0, 0)).is_err());
        assert!(GrayRaster::new(3, 0).is_err());
        assert!(BinaryMask::new(0, 0).is_err());
    }

    #[test]
    fn test_from_vec_size_check() {
        assert!(RgbRaster::from_vec(2, 2, vec![0; 12]).is_ok());
        assert!(RgbRaster::from_vec(2, 2, vec![0; 11]).is_err());
        assert!(GrayRaster::from_vec(2, 2, vec![0; 4]).is_ok());
        assert!(GrayRaster::from_vec(2, 2, vec![0; 5]).is_err());
    }

    #[test]
    fn test_mask_ink() {
        let mut m = BinaryMask::new(3, 3).unwrap();
        assert!(!m.is_ink(1, 1));
        m.set_ink(1, 1);
        assert!(m.is_ink(1, 1));
        assert_eq!(m.count_ink(), 1);
    }
}
