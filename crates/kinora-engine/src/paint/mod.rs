//! Paint model shared between UI and presenters.
//!
//! Scope:
//! - color representation (straight alpha)
//! - brushes (fill + outline, each with its own opacity)
//!
//! Geometry types remain in `coords`.

pub mod brush;
pub mod color;

pub use brush::Brush;
pub use color::Color;
