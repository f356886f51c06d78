//! Contract between the window runtime and the layers above it: the frame
//! callbacks and their per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
