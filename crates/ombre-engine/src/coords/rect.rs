use super::{Axis, Vec2};

/// Axis-aligned rectangle in client pixels (top-left origin).
///
/// This is the shape of a DOM `getBoundingClientRect()` result: the preview
/// surface's bounds that pointer coordinates are projected onto.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Leading edge along `axis` (`left` or `top`).
    #[inline]
    pub fn start(self, axis: Axis) -> f64 {
        self.origin.along(axis)
    }

    /// Length along `axis` (`width` or `height`).
    #[inline]
    pub fn extent(self, axis: Axis) -> f64 {
        self.size.along(axis)
    }

    /// Fraction of the way `coord` lies along `axis`, unclamped.
    ///
    /// Returns `None` when the rect has no usable extent on that axis or the
    /// result is not finite.
    #[inline]
    pub fn fraction_along(self, axis: Axis, coord: f64) -> Option<f64> {
        let extent = self.extent(axis);
        if !(extent > 0.0) {
            return None;
        }
        let t = (coord - self.start(axis)) / extent;
        t.is_finite().then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect { Rect::new(x, y, w, h) }

    // ── start / extent ────────────────────────────────────────────────────

    #[test]
    fn start_and_extent_follow_axis() {
        let rect = r(10.0, 20.0, 30.0, 200.0);
        assert_eq!(rect.start(Axis::Vertical), 20.0);
        assert_eq!(rect.extent(Axis::Vertical), 200.0);
        assert_eq!(rect.start(Axis::Horizontal), 10.0);
        assert_eq!(rect.extent(Axis::Horizontal), 30.0);
    }

    // ── fraction_along ────────────────────────────────────────────────────

    #[test]
    fn fraction_at_edges() {
        let rect = r(0.0, 100.0, 40.0, 200.0);
        assert_eq!(rect.fraction_along(Axis::Vertical, 100.0), Some(0.0));
        assert_eq!(rect.fraction_along(Axis::Vertical, 300.0), Some(1.0));
        assert_eq!(rect.fraction_along(Axis::Vertical, 200.0), Some(0.5));
    }

    #[test]
    fn fraction_is_not_clamped() {
        let rect = r(0.0, 0.0, 10.0, 100.0);
        assert_eq!(rect.fraction_along(Axis::Vertical, -50.0), Some(-0.5));
        assert_eq!(rect.fraction_along(Axis::Vertical, 150.0), Some(1.5));
    }

    #[test]
    fn fraction_without_extent_is_none() {
        assert_eq!(r(0.0, 0.0, 10.0, 0.0).fraction_along(Axis::Vertical, 5.0), None);
        assert_eq!(r(0.0, 0.0, -10.0, 5.0).fraction_along(Axis::Horizontal, 5.0), None);
    }

    #[test]
    fn fraction_of_nan_coord_is_none() {
        assert_eq!(r(0.0, 0.0, 10.0, 10.0).fraction_along(Axis::Vertical, f64::NAN), None);
    }
}
