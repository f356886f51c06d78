use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are kept in paint order: the first item is drawn first (furthest
/// back). `push()` is O(1); `clear()` keeps the allocation for the next frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Point, Rect};
    use crate::paint::{Brush, Color};

    #[test]
    fn items_keep_insertion_order() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0, 0, 10, 10), Brush::solid(Color::BLACK));
        list.push_line(Point::new(0, 0), Point::new(5, 5), Brush::stroke(Color::WHITE, 1.0));
        list.push_text("hi", 12.0, Point::new(1, 1), Brush::solid(Color::WHITE));

        assert_eq!(list.len(), 3);
        assert!(matches!(list.items()[0], DrawCmd::Rect(_)));
        assert!(matches!(list.items()[1], DrawCmd::Line(_)));
        assert!(matches!(list.items()[2], DrawCmd::Text(_)));

        list.clear();
        assert!(list.is_empty());
    }
}
