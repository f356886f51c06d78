use kinora_engine::coords::{Point, Rect, Size};
use kinora_engine::paint::{Brush, Color};
use kinora_engine::scene::DrawList;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with widget-local coordinates: `(0, 0)` is
/// the top-left corner of the widget being painted. Every brush is faded by
/// the widget's opacity, and rectangles that fall completely outside the
/// canvas are culled.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    canvas: Rect,
    origin: Point,
    size: Size,
    opacity: f32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        canvas: Size,
        origin: Point,
        size: Size,
        opacity: f32,
    ) -> Self {
        Self {
            draw_list,
            canvas: Rect::from_origin_size(Point::zero(), canvas),
            origin,
            size,
            opacity,
        }
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Size of the widget being painted.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The widget's own rectangle in local coordinates.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::zero(), self.size)
    }

    /// Absolute canvas position of the local origin.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rect(rect, Brush::solid(color));
    }

    /// Rectangle filled and/or outlined according to `brush`.
    pub fn rect(&mut self, rect: Rect, brush: Brush) {
        let rect = rect.translated(self.origin);
        if !rect.intersects(self.canvas) {
            return;
        }
        self.draw_list.push_rect(rect, brush.faded(self.opacity));
    }

    /// Outline-only rectangle.
    pub fn outline_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.rect(rect, Brush::stroke(color, width));
    }

    /// Text run with its baseline-left corner at `pos`.
    pub fn text(&mut self, text: impl Into<String>, size: f32, pos: Point, color: Color) {
        let brush = Brush::solid(color).faded(self.opacity);
        self.draw_list.push_text(text, size, pos + self.origin, brush);
    }

    /// Line segment stroked with `color`.
    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let brush = Brush::stroke(color, width).faded(self.opacity);
        self.draw_list.push_line(from + self.origin, to + self.origin, brush);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinora_engine::scene::DrawCmd;

    #[test]
    fn translates_into_canvas_space() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, Size::new(100, 100), Point::new(10, 20), Size::new(30, 30), 1.0);
        p.fill_rect(Rect::new(1, 2, 5, 5), Color::WHITE);
        p.line(Point::zero(), Point::new(3, 0), Color::WHITE, 1.0);

        match &list.items()[0] {
            DrawCmd::Rect(r) => assert_eq!(r.rect, Rect::new(11, 22, 5, 5)),
            other => panic!("expected rect, got {other:?}"),
        }
        match &list.items()[1] {
            DrawCmd::Line(l) => assert_eq!((l.from, l.to), (Point::new(10, 20), Point::new(13, 20))),
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn culls_rects_outside_canvas() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, Size::new(100, 100), Point::new(90, 90), Size::new(30, 30), 1.0);
        p.fill_rect(Rect::new(20, 20, 5, 5), Color::WHITE);
        p.fill_rect(Rect::new(0, 0, 5, 5), Color::WHITE);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn applies_opacity() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, Size::new(100, 100), Point::zero(), Size::new(30, 30), 0.5);
        p.fill_rect(Rect::new(0, 0, 5, 5), Color::WHITE);
        match &list.items()[0] {
            DrawCmd::Rect(r) => assert_eq!(r.brush.fill_opacity, 0.5),
            other => panic!("expected rect, got {other:?}"),
        }
    }
}
