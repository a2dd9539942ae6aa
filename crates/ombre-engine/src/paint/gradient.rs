use std::fmt::Write as _;

use super::CssColor;
use crate::coords::Axis;

/// Which CSS gradient function a stop list is rendered into.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientKind {
    /// `linear-gradient(<angle>deg, ...)`. `180` runs top to bottom.
    ///
    /// The angle is stated for a vertical stop axis; see [`oriented`](Self::oriented).
    Linear { angle_deg: f64 },
    /// `radial-gradient(circle, ...)`, stops measured from the center out.
    Radial,
}

impl GradientKind {
    pub const TOP_TO_BOTTOM: GradientKind = GradientKind::Linear { angle_deg: 180.0 };

    /// Parses the names used by the type selector (`linear`, `radial`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::TOP_TO_BOTTOM),
            "radial" => Some(GradientKind::Radial),
            _ => None,
        }
    }

    /// The kind as painted behind stops laid out along `axis`.
    ///
    /// A horizontal bar turns linear angles a quarter turn counter-clockwise,
    /// so the default `180deg` paints left to right (`90deg`) and stop
    /// percentages line up with their positions on screen.
    pub fn oriented(self, axis: Axis) -> Self {
        match (self, axis) {
            (GradientKind::Linear { angle_deg }, Axis::Horizontal) => {
                GradientKind::Linear { angle_deg: (angle_deg - 90.0).rem_euclid(360.0) }
            }
            (kind, _) => kind,
        }
    }

    fn write_prefix(self, out: &mut String) {
        match self {
            GradientKind::Linear { angle_deg } => {
                let _ = write!(out, "linear-gradient({}deg, ", css_number(angle_deg));
            }
            GradientKind::Radial => out.push_str("radial-gradient(circle, "),
        }
    }
}

impl Default for GradientKind {
    fn default() -> Self {
        Self::TOP_TO_BOTTOM
    }
}

/// One anchor of a rendered gradient. `t` is the stop's position in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop<'a> {
    pub t: f64,
    pub color: &'a CssColor,
}

impl<'a> ColorStop<'a> {
    #[inline]
    pub const fn new(t: f64, color: &'a CssColor) -> Self {
        Self { t, color }
    }
}

/// Formats stops, already in render order, into a CSS gradient.
///
/// Each stop becomes `<color> <t*100>%`; stops are joined by a bare comma:
///
/// `linear-gradient(180deg, black 0%,white 100%)`
///
/// An empty list still produces a well-formed prefix and suffix.
pub fn css_gradient<'a>(kind: GradientKind, stops: impl IntoIterator<Item = ColorStop<'a>>) -> String {
    let mut out = String::new();
    kind.write_prefix(&mut out);
    for (i, stop) in stops.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{} {}%", stop.color, css_number(stop.t * 100.0));
    }
    out.push(')');
    out
}

/// Shortest round-trip form, integral values without a fraction (`50`, not
/// `50.0`). Negative zero prints as `0`.
fn css_number(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
