use winit::window::Window;

use crate::coords::CanvasSpace;

use crate::scene::DrawList;

/// Consumer of a finished frame.
///
/// Called once per frame after the draw pass, with the canvas the list is
/// expressed in so the presenter can scale it into the window.
pub trait Presenter {
    fn present(&mut self, window: &Window, canvas: CanvasSpace, list: &DrawList);
}

/// Presenter that only reports frame statistics to the log.
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, _window: &Window, canvas: CanvasSpace, list: &DrawList) {
        self.frames = self.frames.wrapping_add(1);
        log::trace!(
            "frame {}: {} draw commands on {}x{} canvas",
            self.frames,
            list.len(),
            canvas.width,
            canvas.height
        );
    }
}
