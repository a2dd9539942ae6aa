//! Ombre UI; the gradient creator core.
//!
//! A [`GradientCreator`](creator::GradientCreator) owns a
//! [`StopStore`](stops::StopStore) and the select/drag state. Front ends feed
//! it [`SurfaceEvent`](event::SurfaceEvent)s and apply the CSS it renders.
//!
//! ```rust,ignore
//! use ombre_ui::prelude::*;
//!
//! let mut creator = GradientCreator::new();
//! creator.set_bounds(Rect::new(0.0, 0.0, 40.0, 300.0));
//! creator.events().subscribe(CreatorEventKind::Rendered, |ev| {
//!     if let CreatorEvent::Rendered { css } = ev {
//!         preview.set_background(css);
//!     }
//! });
//! creator.handle(SurfaceEvent::DoubleClick { pointer: PointerSample::mouse(20.0, 100.0) });
//! ```

pub mod config;
pub mod creator;
pub mod event;
pub mod global;
pub mod stops;

/// Everything a front end needs; import this in host code.
pub mod prelude {
    pub use crate::config::CreatorConfig;
    pub use crate::creator::{CreatorBus, DragState, GradientCreator};
    pub use crate::event::{CreatorEvent, CreatorEventKind, EventResult, SurfaceEvent};
    pub use crate::global::GlobalAttachment;
    pub use crate::stops::{Stop, StopHandle, StopStore};

    // Re-export the engine primitives everyone needs.
    pub use ombre_engine::coords::{Axis, Rect, Vec2};
    pub use ombre_engine::events::{EventBus, PointerBus, ScopedSubscription, SubscriptionId};
    pub use ombre_engine::input::{GlobalPointer, GlobalPointerKind, PointerSample};
    pub use ombre_engine::paint::{CssColor, GradientKind};
}
