//! Kinora engine crate.
//!
//! Platform pieces used by the UI layer: the winit window loop, input
//! polling, canvas geometry, frame timing, and the presenter-agnostic draw
//! stream.

pub mod coords;
pub mod core;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;
