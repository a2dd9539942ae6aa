//! Ombre engine crate.
//!
//! Shared building blocks for the gradient creator and its front ends:
//! geometry, the paint model, pointer input, the event bus and logging.

pub mod coords;
pub mod events;
pub mod input;
pub mod logging;
pub mod paint;
