use crate::coords::Point;
use crate::paint::Brush;
use crate::scene::{DrawCmd, DrawList};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in canvas units.
    pub size: f32,
    /// Baseline-left of the text run in canvas units.
    pub origin: Point,
    pub brush: Brush,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, text: impl Into<String>, size: f32, origin: Point, brush: Brush) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            size,
            origin,
            brush,
        }));
    }
}
