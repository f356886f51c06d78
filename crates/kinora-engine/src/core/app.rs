use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Frame callbacks registered with the runtime.
///
/// Per redraw the runtime calls [`on_update`](App::on_update) and then
/// [`on_draw`](App::on_draw), always in that order.
pub trait App {
    /// Called for raw window events, before the runtime's own handling.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called with the window's logical size when it is created and whenever
    /// that size changes.
    fn on_resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Advances application state by one frame. Returning
    /// [`AppControl::Exit`] skips the draw and ends the loop.
    fn on_update(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Records and presents the frame.
    fn on_draw(&mut self, ctx: &mut FrameCtx<'_>);
}
