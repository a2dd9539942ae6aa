use std::rc::Rc;

use ombre_engine::coords::{Axis, Rect};
use ombre_engine::events::EventBus;
use ombre_engine::input::{clamp_unit, project_onto_axis, PointerSample};
use ombre_engine::paint::{css_gradient, ColorStop, CssColor, GradientKind};

use crate::config::CreatorConfig;
use crate::event::{CreatorEvent, CreatorEventKind, EventResult, SurfaceEvent};
use crate::stops::{Stop, StopHandle, StopStore};

/// Bus the creator publishes its notifications on.
pub type CreatorBus = EventBus<CreatorEventKind, CreatorEvent>;

/// Drag half of the interaction state.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// The stop follows the pointer until the next release.
    Dragging(StopHandle),
}

// ── GradientCreator ───────────────────────────────────────────────────────

/// Gradient editor core: owns the stops and the select/drag state, turns
/// surface events into stop mutations, and renders the CSS gradient.
///
/// Transitions:
///
/// | state + event              | effect                                           |
/// |----------------------------|--------------------------------------------------|
/// | `* + Press(stop)`          | `Dragging(stop)`, stop selected                  |
/// | `Dragging(s) + Move`       | `s` moves to the clamped projection; re-render   |
/// | `Dragging(s) + Release`    | `Idle`; `s` stays selected                       |
/// | `Idle + DoubleClick`       | new stop at the clamped projection; re-render    |
/// | `* + Click(stop)`          | stop selected                                    |
/// | `* + ColorChanged(c)`      | selection recolored; re-render                   |
///
/// Anything else is [`EventResult::Ignored`]. Every mutation publishes
/// [`CreatorEvent::Rendered`] on [`events`](Self::events).
///
/// Subscribers run while the creator is mutably borrowed; a handler must not
/// borrow the creator's `RefCell` again.
pub struct GradientCreator {
    stops: StopStore,
    drag: DragState,
    selected: Option<StopHandle>,
    bounds: Rect,
    axis: Axis,
    kind: GradientKind,
    new_stop_color: CssColor,
    events: Rc<CreatorBus>,
}

impl GradientCreator {
    pub fn new() -> Self {
        Self::with_config(CreatorConfig::default())
    }

    pub fn with_config(config: CreatorConfig) -> Self {
        let stops = StopStore::with_stops(config.initial_stops);
        log::debug!("gradient creator with {} stops, {} axis", stops.len(), config.axis);
        Self {
            stops,
            drag: DragState::Idle,
            selected: None,
            bounds: Rect::default(),
            axis: config.axis,
            kind: config.kind,
            new_stop_color: config.new_stop_color,
            events: Rc::new(CreatorBus::new()),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn stops(&self) -> &StopStore {
        &self.stops
    }

    #[inline]
    pub fn selected(&self) -> Option<StopHandle> {
        self.selected
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[inline]
    pub fn dragging(&self) -> Option<StopHandle> {
        match self.drag {
            DragState::Dragging(stop) => Some(stop),
            DragState::Idle => None,
        }
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Notification bus. Clone the `Rc` to subscribe from elsewhere.
    #[inline]
    pub fn events(&self) -> &Rc<CreatorBus> {
        &self.events
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Bounds of the preview surface, in the same client space as pointer
    /// samples. Front ends refresh this before forwarding pointer events.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Switches the stop axis and re-renders: linear gradients follow it.
    pub fn set_axis(&mut self, axis: Axis) {
        if self.axis != axis {
            self.axis = axis;
            self.rerender();
        }
    }

    /// Switches the gradient function and re-renders.
    pub fn set_kind(&mut self, kind: GradientKind) {
        if self.kind != kind {
            self.kind = kind;
            self.rerender();
        }
    }

    // ── interaction ───────────────────────────────────────────────────────

    /// Applies one surface event. Events must arrive in order; each is fully
    /// handled, render included, before this returns.
    pub fn handle(&mut self, event: SurfaceEvent) -> EventResult {
        match event {
            SurfaceEvent::Press { stop: Some(stop), .. } if self.stops.contains(stop) => {
                if let DragState::Dragging(previous) = self.drag {
                    log::debug!("press on {stop} while dragging {previous}; restarting drag");
                }
                self.drag = DragState::Dragging(stop);
                self.select(stop);
                EventResult::Consumed
            }
            SurfaceEvent::Press { .. } => EventResult::Ignored,

            SurfaceEvent::Move { pointer } => match self.drag {
                DragState::Dragging(stop) => {
                    let t = self.relative_position(&pointer);
                    if self.stops.update_position(stop, t) {
                        log::trace!("{stop} dragged to {t}");
                        self.rerender();
                        EventResult::Consumed
                    } else {
                        self.drag = DragState::Idle;
                        EventResult::Ignored
                    }
                }
                DragState::Idle => EventResult::Ignored,
            },

            SurfaceEvent::Release => match self.drag {
                DragState::Dragging(stop) => {
                    log::debug!("drag of {stop} ended");
                    self.drag = DragState::Idle;
                    EventResult::Consumed
                }
                DragState::Idle => EventResult::Ignored,
            },

            SurfaceEvent::DoubleClick { pointer } => match self.drag {
                DragState::Idle => {
                    let t = self.relative_position(&pointer);
                    let stop = self.stops.create(t, self.new_stop_color.clone());
                    log::debug!("created {stop} at {t}");
                    self.events.publish(
                        CreatorEventKind::StopCreated,
                        &CreatorEvent::StopCreated { stop, position: t },
                    );
                    self.rerender();
                    EventResult::Consumed
                }
                DragState::Dragging(_) => EventResult::Ignored,
            },

            SurfaceEvent::Click { stop } if self.stops.contains(stop) => {
                self.select(stop);
                EventResult::Consumed
            }
            SurfaceEvent::Click { .. } => EventResult::Ignored,

            SurfaceEvent::ColorChanged { color } => {
                let Some(stop) = self.selected else {
                    return EventResult::Ignored;
                };
                if !self.stops.update_color(stop, color) {
                    return EventResult::Ignored;
                }
                log::debug!("recolored {stop}");
                self.rerender();
                EventResult::Consumed
            }
        }
    }

    /// Pointer position along the axis, relative to the preview bounds and
    /// clamped to `[0, 1]`.
    pub fn relative_position(&self, pointer: &PointerSample) -> f64 {
        clamp_unit(project_onto_axis(pointer, self.bounds, self.axis))
    }

    fn select(&mut self, stop: StopHandle) {
        if self.selected != Some(stop) {
            log::debug!("selected {stop}");
        }
        self.selected = Some(stop);
        if let Some(color) = self.stops.get(stop).map(|s| s.color.clone()) {
            self.events.publish(
                CreatorEventKind::SelectionChanged,
                &CreatorEvent::SelectionChanged { stop, color },
            );
        }
    }

    fn rerender(&mut self) {
        let css = self.render();
        log::trace!("render: {css}");
        self.events.publish(CreatorEventKind::Rendered, &CreatorEvent::Rendered { css });
    }

    // ── output ────────────────────────────────────────────────────────────

    /// The gradient as a CSS `background` value, stops in ascending order.
    ///
    /// `linear-gradient(180deg, black 0%,white 100%)`
    pub fn render(&self) -> String {
        let sorted = self.stops.entries_sorted();
        css_gradient(self.kind.oriented(self.axis), sorted.iter().map(|(_, s)| ColorStop::new(s.position, &s.color)))
    }

    /// Public read interface: every stop, ascending by position.
    pub fn get_stops(&self) -> Vec<Stop> {
        self.stops.snapshot_sorted()
    }

    /// [`get_stops`](Self::get_stops) as a JSON array for host applications.
    pub fn stops_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.get_stops())
    }
}

impl Default for GradientCreator {
    fn default() -> Self {
        Self::new()
    }
}
