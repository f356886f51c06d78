//! Arena-backed widget tree and coordinate model.
//!
//! Every widget lives in one [`SlotMap`] addressed by [`WidgetId`]. Parent
//! links are plain ids, children are an ordered id list (last = topmost).
//! Absolute positions are cached and recomputed eagerly whenever a widget or
//! one of its ancestors moves, so `absolute == parent.absolute + relative`
//! holds at all times for attached widgets.

use std::collections::VecDeque;

use kinora_engine::coords::{Point, Rect, Size};
use kinora_engine::paint::Brush;
use slotmap::{SlotMap, new_key_type};

use crate::message::Message;
use crate::widget::Widget;

new_key_type! {
    /// Stable handle of a widget in its scene.
    pub struct WidgetId;
}

pub(crate) struct Node {
    /// `None` while the widget is checked out for a handler call.
    pub(crate) widget: Option<Box<dyn Widget>>,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,
    pub(crate) relative: Point,
    pub(crate) absolute: Point,
    pub(crate) size: Size,
    pub(crate) opacity: f32,
    pub(crate) background: Brush,
    pub(crate) inbox: VecDeque<Message>,
    /// Last [`UiScene::update`](crate::scene::UiScene::update) pass that drained `inbox`.
    pub(crate) drained_pass: u64,
}

impl Node {
    fn new(widget: Box<dyn Widget>, relative: Point, size: Size) -> Self {
        Self {
            widget: Some(widget),
            parent: None,
            children: Vec::new(),
            relative,
            absolute: relative,
            size,
            opacity: 1.0,
            background: Brush::default(),
            inbox: VecDeque::new(),
            drained_pass: 0,
        }
    }
}

/// Structural storage of a scene: nodes, links and positions.
#[derive(Default)]
pub(crate) struct WidgetTree {
    nodes: SlotMap<WidgetId, Node>,
}

impl WidgetTree {
    pub(crate) fn new() -> Self {
        Self { nodes: SlotMap::with_key() }
    }

    pub(crate) fn insert(&mut self, widget: Box<dyn Widget>, bounds: Rect) -> WidgetId {
        self.nodes.insert(Node::new(widget, bounds.origin, bounds.size))
    }

    #[inline]
    pub(crate) fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    #[inline]
    pub(crate) fn node(&self, id: WidgetId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: WidgetId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id)?.parent
    }

    pub(crate) fn children(&self, id: WidgetId) -> &[WidgetId] {
        match self.nodes.get(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Walks parent links up to the widget without a parent.
    pub(crate) fn root_of(&self, id: WidgetId) -> WidgetId {
        let mut cur = id;
        while let Some(parent) = self.parent(cur) {
            cur = parent;
        }
        cur
    }

    /// Returns `true` if `ancestor` is a strict ancestor of `id`.
    pub(crate) fn is_descendant_of(&self, id: WidgetId, ancestor: WidgetId) -> bool {
        let mut cur = self.parent(id);
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.parent(p);
        }
        false
    }

    /// Ids from the topmost ancestor down to `id`, inclusive.
    pub(crate) fn path_to(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut path = Vec::new();
        if !self.contains(id) {
            return path;
        }
        let mut cur = Some(id);
        while let Some(w) = cur {
            path.push(w);
            cur = self.parent(w);
        }
        path.reverse();
        path
    }

    /// Appends `child` to `parent`'s children and recomputes the subtree.
    pub(crate) fn link(&mut self, child: WidgetId, parent: WidgetId) {
        debug_assert!(
            child != parent && !self.is_descendant_of(parent, child),
            "attaching {child:?} under {parent:?} would create a cycle"
        );
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
        self.update_absolute(child);
    }

    /// Removes `child` from its parent's children. Returns the former parent.
    pub(crate) fn unlink(&mut self, child: WidgetId) -> Option<WidgetId> {
        let parent = self.nodes.get_mut(child)?.parent.take()?;
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.retain(|&c| c != child);
        }
        self.update_absolute(child);
        Some(parent)
    }

    /// Recomputes the absolute origin of `id` from its parent, then of every
    /// descendant.
    pub(crate) fn update_absolute(&mut self, id: WidgetId) {
        let base = self
            .parent(id)
            .and_then(|p| self.nodes.get(p))
            .map_or(Point::zero(), |p| p.absolute);

        let mut stack = vec![(id, base)];
        while let Some((w, base)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(w) else { continue };
            node.absolute = base + node.relative;
            let abs = node.absolute;
            stack.extend(node.children.iter().map(|&c| (c, abs)));
        }
    }

    /// Removes `id` and all of its descendants from the arena, returning the
    /// freed ids (parents before children). Does not touch the parent link.
    pub(crate) fn remove_subtree(&mut self, id: WidgetId) -> Vec<WidgetId> {
        let mut freed = Vec::new();
        let mut stack = vec![id];
        while let Some(w) = stack.pop() {
            if let Some(node) = self.nodes.remove(w) {
                freed.push(w);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        freed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Panel;

    fn add(tree: &mut WidgetTree, parent: Option<WidgetId>, x: i32, y: i32) -> WidgetId {
        let id = tree.insert(Box::new(Panel), Rect::new(x, y, 10, 10));
        if let Some(p) = parent {
            tree.link(id, p);
        }
        id
    }

    #[test]
    fn absolute_follows_ancestors() {
        let mut tree = WidgetTree::new();
        let root = add(&mut tree, None, 5, 5);
        let a = add(&mut tree, Some(root), 10, 10);
        let b = add(&mut tree, Some(a), 1, 2);
        assert_eq!(tree.node(b).map(|n| n.absolute), Some(Point::new(16, 17)));

        if let Some(n) = tree.node_mut(a) {
            n.relative = Point::new(20, 0);
        }
        tree.update_absolute(a);
        assert_eq!(tree.node(b).map(|n| n.absolute), Some(Point::new(26, 7)));
    }

    #[test]
    fn path_and_membership() {
        let mut tree = WidgetTree::new();
        let root = add(&mut tree, None, 0, 0);
        let a = add(&mut tree, Some(root), 0, 0);
        let b = add(&mut tree, Some(a), 0, 0);
        let c = add(&mut tree, Some(root), 0, 0);

        assert_eq!(tree.path_to(b), vec![root, a, b]);
        assert!(tree.is_descendant_of(b, root));
        assert!(!tree.is_descendant_of(b, c));
        assert!(!tree.is_descendant_of(root, root));
        assert_eq!(tree.root_of(b), root);
    }

    #[test]
    fn unlink_orphans_and_resets_origin() {
        let mut tree = WidgetTree::new();
        let root = add(&mut tree, None, 5, 5);
        let a = add(&mut tree, Some(root), 1, 1);

        assert_eq!(tree.unlink(a), Some(root));
        assert!(tree.children(root).is_empty());
        assert_eq!(tree.node(a).map(|n| n.absolute), Some(Point::new(1, 1)));
        assert_eq!(tree.unlink(a), None);
    }

    #[test]
    fn remove_subtree_frees_descendants() {
        let mut tree = WidgetTree::new();
        let root = add(&mut tree, None, 0, 0);
        let a = add(&mut tree, Some(root), 0, 0);
        let b = add(&mut tree, Some(a), 0, 0);
        tree.unlink(a);

        assert_eq!(tree.remove_subtree(a), vec![a, b]);
        assert_eq!(tree.len(), 1);
        assert!(!tree.contains(b));
    }
}
