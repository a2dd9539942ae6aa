//! Coordinate and geometry types shared by the creator and its front ends.
//!
//! Canonical space:
//! - Client (CSS) pixels, as reported by pointer events
//! - Origin top-left
//! - +X right, +Y down

mod axis;
mod rect;
mod vec2;

pub use axis::Axis;
pub use rect::Rect;
pub use vec2::Vec2;
