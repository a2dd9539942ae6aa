//! Pointer input model.
//!
//! Front ends translate platform mouse/touch events into [`PointerSample`]s;
//! the creator projects them onto the preview bounds.

mod projection;
mod types;

pub use projection::{clamp_unit, project_onto_axis};
pub use types::{GlobalPointer, GlobalPointerKind, PointerSample};
