use kinora_engine::coords::Point;
use kinora_engine::paint::Color;

use crate::painter::Painter;
use crate::widget::Widget;

/// A single-run text widget.
///
/// # Example
/// ```rust,ignore
/// scene.add(root, Label::new("Now showing", 18.0, Color::WHITE), Rect::new(20, 10, 200, 24));
/// ```
pub struct Label {
    pub text: String,
    pub size: f32,
    pub color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>, size: f32, color: Color) -> Self {
        Self { text: text.into(), size, color }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn paint(&self, painter: &mut Painter<'_>) {
        // Baseline sits one font size below the top edge.
        let pos = Point::new(0, self.size.round() as i32);
        painter.text(self.text.clone(), self.size, pos, self.color);
    }
}
