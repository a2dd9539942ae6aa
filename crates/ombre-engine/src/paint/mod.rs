//! Paint model for the gradient preview.
//!
//! Scope:
//! - color representation (opaque CSS text)
//! - gradient kinds and the CSS gradient formatter

pub mod color;
pub mod gradient;

pub use color::CssColor;
pub use gradient::{css_gradient, ColorStop, GradientKind};
