use crate::coords::Rect;
use crate::paint::Brush;
use crate::scene::{DrawCmd, DrawList};

/// Rectangle draw payload (filled and/or outlined according to the brush).
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub brush: Brush,
}

impl DrawList {
    /// Records a rectangle draw command. Invisible brushes are skipped.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, brush: Brush) {
        if brush.is_invisible() {
            return;
        }
        self.push(DrawCmd::Rect(RectCmd { rect, brush }));
    }
}
