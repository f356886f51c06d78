//! Frame timing.
//!
//! One [`FrameClock`] per window; `tick()` once per frame yields the clamped
//! delta fed to the UI's timers.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
