use super::{Point, Size};

/// Axis-aligned rectangle in canvas units (top-left origin).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Point {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn right(self) -> i32 {
        self.origin.x.saturating_add(self.size.width as i32)
    }

    #[inline]
    pub fn bottom(self) -> i32 {
        self.origin.y.saturating_add(self.size.height as i32)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Closed containment: [min, max] on both axes.
    ///
    /// Adjacent rectangles both contain their shared edge; callers that need
    /// a single winner (hit-testing) resolve it by z-order.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.origin.x && p.x <= self.right() && p.y >= self.origin.y && p.y <= self.bottom()
    }

    /// Returns `true` if the two rectangles share at least one point.
    #[inline]
    pub fn intersects(self, other: Rect) -> bool {
        self.origin.x <= other.right()
            && other.origin.x <= self.right()
            && self.origin.y <= other.bottom()
            && other.origin.y <= self.bottom()
    }

    /// Same rectangle moved by `offset`.
    #[inline]
    pub fn translated(self, offset: Point) -> Rect {
        Rect::from_origin_size(self.origin + offset, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: u32, h: u32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0, 0, 10, 10).contains(Point::new(5, 5)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(10, 10, 50, 50).contains(Point::new(10, 10)));
    }

    #[test]
    fn contains_bottom_right_inclusive() {
        // Both edges are closed, matching the widget hit-test contract.
        assert!(r(10, 10, 50, 50).contains(Point::new(60, 60)));
        assert!(!r(10, 10, 50, 50).contains(Point::new(61, 60)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0, 0, 10, 10).contains(Point::new(-1, 5)));
        assert!(!r(0, 0, 10, 10).contains(Point::new(5, -1)));
    }

    #[test]
    fn zero_size_contains_only_origin() {
        let rect = r(3, 4, 0, 0);
        assert!(rect.contains(Point::new(3, 4)));
        assert!(!rect.contains(Point::new(4, 4)));
        assert!(rect.is_empty());
    }

    // ── intersects ────────────────────────────────────────────────────────

    #[test]
    fn intersects_overlapping_and_touching() {
        assert!(r(0, 0, 10, 10).intersects(r(5, 5, 10, 10)));
        assert!(r(0, 0, 10, 10).intersects(r(10, 0, 10, 10)));
    }

    #[test]
    fn intersects_disjoint() {
        assert!(!r(0, 0, 5, 5).intersects(r(20, 20, 5, 5)));
    }

    #[test]
    fn translated_keeps_size() {
        let moved = r(1, 2, 3, 4).translated(Point::new(10, -2));
        assert_eq!(moved, r(11, 0, 3, 4));
    }
}
