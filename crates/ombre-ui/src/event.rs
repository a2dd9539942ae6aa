use ombre_engine::input::PointerSample;
use ombre_engine::paint::CssColor;

use crate::stops::StopHandle;

/// Input delivered by the input surface (preview bar, stop elements, color
/// picker) to [`GradientCreator::handle`](crate::creator::GradientCreator::handle).
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Primary button / touch went down. `stop` is the stop under the
    /// pointer, if any.
    Press { stop: Option<StopHandle>, pointer: PointerSample },
    /// Pointer moved, anywhere in the document.
    Move { pointer: PointerSample },
    /// Primary button / touch released, anywhere in the document.
    Release,
    /// Double-click on the preview background.
    DoubleClick { pointer: PointerSample },
    /// Click on a stop that was not part of a drag gesture.
    Click { stop: StopHandle },
    /// The color picker reported a new value for the current selection.
    ColorChanged { color: CssColor },
}

/// Result returned by [`GradientCreator::handle`](crate::creator::GradientCreator::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event changed creator state.
    Consumed,
    /// Event did not apply in the current state.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

// ── Outgoing ──────────────────────────────────────────────────────────────

/// Notifications published by the creator on its event bus.
#[derive(Debug, Clone, PartialEq)]
pub enum CreatorEvent {
    /// The gradient was re-derived after a mutation.
    Rendered { css: String },
    /// A stop became the selection. `color` lets a color picker show it.
    SelectionChanged { stop: StopHandle, color: CssColor },
    /// A stop was added by double-click.
    StopCreated { stop: StopHandle, position: f64 },
}

/// Subscription key for [`CreatorEvent`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CreatorEventKind {
    Rendered,
    SelectionChanged,
    StopCreated,
}

impl CreatorEvent {
    #[inline]
    pub fn kind(&self) -> CreatorEventKind {
        match self {
            CreatorEvent::Rendered { .. } => CreatorEventKind::Rendered,
            CreatorEvent::SelectionChanged { .. } => CreatorEventKind::SelectionChanged,
            CreatorEvent::StopCreated { .. } => CreatorEventKind::StopCreated,
        }
    }
}
