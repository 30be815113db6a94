//! Rectangle regions
//!
//! [`Rect`] delimits the image-space region a stroke occupies. The
//! sampler partitions a stroke's rect horizontally into hop-width
//! slices.

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(left: usize, top: usize, width: usize, height: usize) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> usize {
        self.left + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// A rectangle with zero width or height encloses no pixels.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(2, 3, 10, 4);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 7);
        assert!(!r.is_degenerate());
    }

    #[test]
    fn test_degenerate() {
        assert!(Rect::new(0, 0, 0, 5).is_degenerate());
        assert!(Rect::new(0, 0, 5, 0).is_degenerate());
    }
}
