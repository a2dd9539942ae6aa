use super::Axis;

/// 2D point in client (CSS) pixels.
///
/// `f64` because browser client coordinates and bounding rects are doubles,
/// and stop percentages must print exactly as the host computes them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    #[inline]
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}
