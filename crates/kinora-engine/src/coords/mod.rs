//! Coordinate and geometry types shared by the platform layer and the UI core.
//!
//! Canonical space is the logical canvas:
//! - integer canvas units, independent of the physical window size
//! - origin top-left
//! - +X right, +Y down
//!
//! The window runtime maps window-logical pixels onto the canvas with
//! [`CanvasSpace::to_canvas`].

mod canvas;
mod point;
mod rect;

pub use canvas::CanvasSpace;
pub use point::{Point, Size};
pub use rect::Rect;
