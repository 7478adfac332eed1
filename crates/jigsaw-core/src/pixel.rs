//! Continuous screen-space coordinates, relative to the board's top-left corner.

use std::ops::{Add, Sub};

/// A point in board pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    /// Horizontal offset from the board origin, growing to the right.
    pub x: f32,
    /// Vertical offset from the board origin, growing downwards.
    pub y: f32,
}

impl PixelPoint {
    /// The board origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a point with both coordinates set to `v`.
    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }
}

impl Add for PixelPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PixelPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle in board pixel space.
///
/// Containment is half-open: the left and top edges are inside, the right and
/// bottom edges are not, so adjacent cells never both contain a shared edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    /// Top-left corner.
    pub min: PixelPoint,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl PixelRect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(min: PixelPoint, width: f32, height: f32) -> Self {
        Self { min, width, height }
    }

    /// Creates a square with its top-left corner at `min`.
    #[must_use]
    pub const fn square(min: PixelPoint, side: f32) -> Self {
        Self::new(min, side, side)
    }

    /// Returns the bottom-right corner (exclusive).
    #[must_use]
    pub fn max(&self) -> PixelPoint {
        PixelPoint::new(self.min.x + self.width, self.min.y + self.height)
    }

    /// Returns `true` if `point` lies within the rectangle.
    #[must_use]
    pub fn contains(&self, point: PixelPoint) -> bool {
        let max = self.max();
        (self.min.x..max.x).contains(&point.x) && (self.min.y..max.y).contains(&point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let rect = PixelRect::square(PixelPoint::new(100.0, 0.0), 100.0);
        assert!(rect.contains(PixelPoint::new(100.0, 0.0)));
        assert!(rect.contains(PixelPoint::new(199.9, 99.9)));
        assert!(!rect.contains(PixelPoint::new(200.0, 50.0)));
        assert!(!rect.contains(PixelPoint::new(150.0, 100.0)));
        assert!(!rect.contains(PixelPoint::new(99.9, 50.0)));
    }

    #[test]
    fn max_is_exclusive_corner() {
        let rect = PixelRect::new(PixelPoint::new(10.0, 20.0), 40.0, 60.0);
        assert_eq!(rect.max(), PixelPoint::new(50.0, 80.0));
    }

    #[test]
    fn point_arithmetic() {
        let a = PixelPoint::new(3.0, 4.0);
        let b = PixelPoint::splat(1.0);
        assert_eq!(a + b, PixelPoint::new(4.0, 5.0));
        assert_eq!(a - b, PixelPoint::new(2.0, 3.0));
    }
}
