use super::{Point, Size};

/// The fixed logical canvas UI coordinates live in.
///
/// The canvas keeps its size when the window is resized; it is scaled
/// uniformly to fit the window and centered, leaving letterbox bars on the
/// axis with spare room.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CanvasSpace {
    pub width: u32,
    pub height: u32,
}

impl CanvasSpace {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Canvas-to-window scale factor for a window of `window` logical pixels.
    pub fn fit_scale(self, window: (f32, f32)) -> f32 {
        if !self.is_valid() || window.0 <= 0.0 || window.1 <= 0.0 {
            return 1.0;
        }
        (window.0 / self.width as f32).min(window.1 / self.height as f32)
    }

    /// Maps a window-logical position to canvas units.
    ///
    /// Positions over the letterbox bars map outside `[0, width] x [0, height]`.
    pub fn to_canvas(self, window: (f32, f32), pos: (f32, f32)) -> Point {
        let scale = self.fit_scale(window);
        let offset_x = (window.0 - self.width as f32 * scale) * 0.5;
        let offset_y = (window.1 - self.height as f32 * scale) * 0.5;
        Point::new(
            ((pos.0 - offset_x.max(0.0)) / scale) as i32,
            ((pos.1 - offset_y.max(0.0)) / scale) as i32,
        )
    }
}

impl Default for CanvasSpace {
    fn default() -> Self {
        Self::new(1370, 720)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_when_window_matches_canvas() {
        let c = CanvasSpace::new(200, 100);
        assert_eq!(c.to_canvas((200.0, 100.0), (15.0, 30.0)), Point::new(15, 30));
    }

    #[test]
    fn uniform_scale_with_horizontal_letterbox() {
        // Window twice as tall as needed horizontally: scale 2, bars left/right.
        let c = CanvasSpace::new(100, 100);
        assert_eq!(c.fit_scale((400.0, 200.0)), 2.0);
        // 100px bar on each side.
        assert_eq!(c.to_canvas((400.0, 200.0), (100.0, 0.0)), Point::new(0, 0));
        assert_eq!(c.to_canvas((400.0, 200.0), (300.0, 200.0)), Point::new(100, 100));
    }

    #[test]
    fn degenerate_window_falls_back_to_unit_scale() {
        let c = CanvasSpace::new(100, 100);
        assert_eq!(c.fit_scale((0.0, 0.0)), 1.0);
    }
}
