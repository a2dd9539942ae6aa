use crate::coords::{Axis, Vec2};

/// Raw pointer data carried by a press, move or double-click.
///
/// Mirrors what the browser hands over: mouse events carry a client
/// coordinate, touch events carry a list of changed touch points. A sample
/// may carry neither (synthetic or foreign events).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSample {
    /// Client coordinate of a mouse-style event.
    pub client: Option<Vec2>,
    /// Client coordinates of the changed touch points, in event order.
    pub changed_touches: Vec<Vec2>,
}

impl PointerSample {
    /// A mouse-style sample at `(x, y)`.
    #[inline]
    pub fn mouse(x: f64, y: f64) -> Self {
        Self { client: Some(Vec2::new(x, y)), changed_touches: Vec::new() }
    }

    /// A touch-style sample.
    #[inline]
    pub fn touch(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self { client: None, changed_touches: points.into_iter().collect() }
    }

    /// A sample with no usable coordinate.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The coordinate along `axis`: the direct client coordinate when present,
    /// otherwise the first changed touch point.
    pub fn coord(&self, axis: Axis) -> Option<f64> {
        self.client
            .or_else(|| self.changed_touches.first().copied())
            .map(|p| p.along(axis))
            .filter(|c| c.is_finite())
    }
}

/// Document-level pointer notifications a widget needs while dragging,
/// wherever the pointer currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalPointer {
    /// `mousemove` / `touchmove`.
    Move(PointerSample),
    /// `mouseup` / `touchend`.
    Release,
}

/// Subscription key for [`GlobalPointer`] events.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GlobalPointerKind {
    Move,
    Release,
}

impl GlobalPointer {
    #[inline]
    pub fn kind(&self) -> GlobalPointerKind {
        match self {
            GlobalPointer::Move(_) => GlobalPointerKind::Move,
            GlobalPointer::Release => GlobalPointerKind::Release,
        }
    }
}
