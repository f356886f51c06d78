//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the window, keeps its input state, and
//! drives the [`App`](crate::core::App) frame callbacks.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
