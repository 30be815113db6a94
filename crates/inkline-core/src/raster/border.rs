//! Border padding
//!
//! Adds uniform background rows above and below the raster (never on the
//! left/right) so strokes near the original top or bottom edge keep
//! vertical room for centerline and margin analysis.

use super::RgbRaster;
use crate::error::CoreResult;

impl RgbRaster {
    /// Add `margin` rows of `color` above and below the image.
    ///
    /// Width is unchanged; height grows by `2 * margin`. A margin of 0
    /// returns a copy.
    pub fn add_vertical_border(&self, margin: usize, color: (u8, u8, u8)) -> CoreResult<RgbRaster> {
        if margin == 0 {
            return Ok(self.clone());
        }

        let mut out = RgbRaster::new_filled(self.width(), self.height() + 2 * margin, color)?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.set(x, y + margin, self.get(x, y));
            }
        }
        Ok(out)
    }
}
