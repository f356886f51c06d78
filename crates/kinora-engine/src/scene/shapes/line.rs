use crate::coords::Point;
use crate::paint::Brush;
use crate::scene::{DrawCmd, DrawList};

/// Line segment draw payload, stroked with the brush outline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Point,
    pub to: Point,
    pub brush: Brush,
}

impl DrawList {
    /// Records a line draw command.
    #[inline]
    pub fn push_line(&mut self, from: Point, to: Point, brush: Brush) {
        self.push(DrawCmd::Line(LineCmd { from, to, brush }));
    }
}
