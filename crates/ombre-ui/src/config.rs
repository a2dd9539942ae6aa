use ombre_engine::coords::Axis;
use ombre_engine::paint::{CssColor, GradientKind};

/// Construction-time settings for a [`GradientCreator`](crate::creator::GradientCreator).
///
/// ```rust,ignore
/// let creator = GradientCreator::with_config(CreatorConfig {
///     axis: Axis::Horizontal,
///     kind: GradientKind::Linear { angle_deg: 90.0 },
///     ..CreatorConfig::default()
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CreatorConfig {
    /// Axis pointer coordinates are projected onto.
    pub axis: Axis,
    /// CSS gradient function the stops render into.
    pub kind: GradientKind,
    /// Stops present before any interaction. Empty falls back to black at
    /// `0` and white at `1`.
    pub initial_stops: Vec<(f64, CssColor)>,
    /// Color given to stops created by double-click.
    pub new_stop_color: CssColor,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            kind: GradientKind::TOP_TO_BOTTOM,
            initial_stops: vec![(0.0, CssColor::black()), (1.0, CssColor::white())],
            new_stop_color: CssColor::default(),
        }
    }
}
