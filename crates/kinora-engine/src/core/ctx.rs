use winit::window::Window;

use crate::input::InputState;
use crate::time::FrameTime;

/// Per-frame context passed to the [`App`](super::App) frame callbacks.
///
/// `'a` is the duration of the callback invocation.
pub struct FrameCtx<'a> {
    pub window: &'a Window,
    pub input: &'a InputState,
    pub time: FrameTime,
}

impl FrameCtx<'_> {
    /// Inner window size in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        (size.width as f32, size.height as f32)
    }
}
