use crate::coords::{Axis, Rect};

use super::PointerSample;

/// Maps a pointer sample onto `bounds` along `axis`.
///
/// Returns `(coord - start) / extent`, unclamped. Total: a sample with no
/// usable coordinate, or bounds with no extent on `axis`, projects to `0`.
pub fn project_onto_axis(sample: &PointerSample, bounds: Rect, axis: Axis) -> f64 {
    sample
        .coord(axis)
        .and_then(|c| bounds.fraction_along(axis, c))
        .unwrap_or(0.0)
}

/// Clamps to `[0, 1]`. NaN becomes `0`, and so does negative zero.
#[inline]
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() || t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        t
    }
}
