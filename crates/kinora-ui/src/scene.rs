use std::ops::{Deref, DerefMut};

use kinora_engine::coords::{Point, Rect, Size};
use kinora_engine::input::{InputSource, Key};
use kinora_engine::paint::{Brush, Color};

use crate::generator::MessageGenerator;
use crate::message::Message;
use crate::timer::{TimerId, TimerRegistry};
use crate::tree::{WidgetId, WidgetTree};
use crate::widget::{AsAny, Widget};
use crate::widgets::Panel;

// ── UiConfig ──────────────────────────────────────────────────────────────

/// Configuration of a [`UiScene`].
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Fixed logical canvas; the root widget covers it exactly.
    pub canvas: Size,
    /// Keys polled for press/release edges every frame.
    pub tracked_keys: Vec<Key>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(1370, 720),
            tracked_keys: Key::TRACKED.to_vec(),
        }
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// One widget tree together with everything its dispatch pass mutates:
/// focus and cursor widgets, the timer registry and the input generator.
///
/// Drive it once per frame with [`update`](UiScene::update) followed by
/// [`draw`](UiScene::draw).
///
/// # Example
///
/// ```rust,ignore
/// let mut scene = UiScene::new(UiConfig::default());
/// let search = scene.add(scene.root(), TextEdit::new(), Rect::new(20, 20, 300, 32));
/// scene.set_focus(search);
///
/// // In the frame callback:
/// scene.update(dt_ms, &input);
/// draw_list.clear();
/// scene.draw(&mut draw_list);
/// ```
pub struct UiScene {
    pub(crate) tree: WidgetTree,
    pub(crate) root: WidgetId,
    pub(crate) focus: Option<WidgetId>,
    pub(crate) cursor: Option<WidgetId>,
    pub(crate) timers: TimerRegistry,
    pub(crate) generator: MessageGenerator,
    pub(crate) config: UiConfig,
    /// Widgets whose cleanup hook was requested while they were handling an
    /// event; it runs once the handler returns.
    pub(crate) cleanup_owed: Vec<WidgetId>,
    /// Counts [`update`](UiScene::update) calls.
    pub(crate) pass: u64,
}

impl UiScene {
    pub fn new(config: UiConfig) -> Self {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Box::new(Panel), Rect::from_origin_size(Point::zero(), config.canvas));
        Self {
            tree,
            root,
            focus: None,
            cursor: None,
            timers: TimerRegistry::new(),
            generator: MessageGenerator::new(),
            config,
            cleanup_owed: Vec::new(),
            pass: 0,
        }
    }

    #[inline]
    pub fn root(&self) -> WidgetId {
        self.root
    }

    #[inline]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.tree.contains(id)
    }

    /// Number of live widgets, attached or not.
    pub fn widget_count(&self) -> usize {
        self.tree.len()
    }

    // ── construction ──────────────────────────────────────────────────────

    /// Creates `widget` as the topmost child of `parent`, at `bounds`
    /// (relative to `parent`).
    pub fn add(&mut self, parent: WidgetId, widget: impl Widget, bounds: Rect) -> WidgetId {
        let id = self.tree.insert(Box::new(widget), bounds);
        if self.tree.contains(parent) {
            self.tree.link(id, parent);
        } else {
            log::warn!("add: parent {parent:?} does not exist, {id:?} left unattached");
        }
        id
    }

    /// Creates `widget` without a parent. Attach it later with
    /// [`attach`](UiScene::attach).
    pub fn add_detached(&mut self, widget: impl Widget, bounds: Rect) -> WidgetId {
        self.tree.insert(Box::new(widget), bounds)
    }

    /// Returns the widget behaviour stored at `id` if it is a `T`.
    ///
    /// `None` while the widget is handling an event.
    pub fn widget<T: Widget>(&self, id: WidgetId) -> Option<&T> {
        let w: &dyn Widget = self.tree.node(id)?.widget.as_deref()?;
        <dyn Widget as AsAny>::as_any(w).downcast_ref::<T>()
    }

    pub fn widget_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> {
        let w: &mut dyn Widget = self.tree.node_mut(id)?.widget.as_deref_mut()?;
        <dyn Widget as AsAny>::as_any_mut(w).downcast_mut::<T>()
    }

    // ── tree structure ────────────────────────────────────────────────────

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.tree.parent(id)
    }

    /// Children of `id` in z-order (last = topmost).
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.tree.children(id)
    }

    /// Walks up to the widget that has no parent.
    pub fn root_of(&self, id: WidgetId) -> WidgetId {
        self.tree.root_of(id)
    }

    /// Returns `true` if `ancestor` is above `id` (at any depth).
    pub fn is_descendant_of(&self, id: WidgetId, ancestor: WidgetId) -> bool {
        self.tree.is_descendant_of(id, ancestor)
    }

    /// Returns `true` if `child` is anywhere in `id`'s subtree.
    pub fn has_child(&self, id: WidgetId, child: WidgetId) -> bool {
        self.tree.is_descendant_of(child, id)
    }

    /// Appends an unattached widget to `parent`'s children (topmost).
    ///
    /// A widget that still has a parent is moved; no cleanup hook runs.
    pub fn attach(&mut self, id: WidgetId, parent: WidgetId) {
        if !self.tree.contains(id) || !self.tree.contains(parent) {
            log::warn!("attach: {id:?} or {parent:?} does not exist");
            return;
        }
        if id == parent || self.tree.is_descendant_of(parent, id) {
            debug_assert!(false, "attaching {id:?} under its own descendant {parent:?}");
            log::warn!("attach: refusing to create a cycle ({id:?} under {parent:?})");
            return;
        }
        self.tree.unlink(id);
        self.tree.link(id, parent);
    }

    /// Moves `id` under `parent`, keeping its relative position.
    pub fn reparent(&mut self, id: WidgetId, parent: WidgetId) {
        self.attach(id, parent);
    }

    /// Removes `id` from its parent's children.
    ///
    /// Runs the widget's cleanup hook, then redirects focus and cursor to
    /// the former parent if they point into the removed subtree. The widget
    /// stays alive, unattached; see [`destroy`](UiScene::destroy).
    ///
    /// A widget removing itself from its own handler gets the hook once the
    /// handler returns.
    pub fn detach(&mut self, id: WidgetId) {
        let Some(parent) = self.tree.parent(id) else {
            log::debug!("detach: {id:?} has no parent");
            return;
        };

        self.run_cleanup(id);

        // Cleanup may have rearranged the tree.
        let parent = self.tree.parent(id).unwrap_or(parent);
        self.redirect_singletons(id, parent);
        self.tree.unlink(id);
    }

    /// Detaches `id` and frees it together with its subtree. Timers owned by
    /// any freed widget are unregistered.
    pub fn destroy(&mut self, id: WidgetId) {
        if !self.tree.contains(id) {
            log::debug!("destroy: {id:?} already gone");
            return;
        }
        if id == self.root {
            log::warn!("destroy: the root widget cannot be destroyed");
            return;
        }

        // Undelivered ticks of the subtree can only sit on this path.
        let ancestors = self.tree.path_to(id);
        match self.tree.parent(id) {
            Some(_) => self.detach(id),
            None => self.run_cleanup(id),
        }
        // An unattached widget may still have been made focus/cursor.
        for slot in [&mut self.focus, &mut self.cursor] {
            if slot.is_some_and(|w| w == id || self.tree.is_descendant_of(w, id)) {
                *slot = None;
            }
        }

        let freed = self.tree.remove_subtree(id);
        for &w in &freed {
            let killed = self.timers.kill_all(w);
            if killed > 0 {
                log::trace!("destroy: dropped {killed} timer(s) of {w:?}");
            }
        }
        for a in ancestors {
            if let Some(node) = self.tree.node_mut(a) {
                node.inbox.retain(|m| !freed.iter().any(|&w| m.is_timer_of(w)));
            }
        }
        log::debug!("destroyed {id:?} ({} widget(s))", freed.len());
    }

    /// Moves `id` to the end of its parent's children (drawn last, hit first).
    pub fn bring_to_top(&mut self, id: WidgetId) {
        let Some(parent) = self.tree.parent(id) else { return };
        if let Some(node) = self.tree.node_mut(parent) {
            node.children.retain(|&c| c != id);
            node.children.push(id);
        }
    }

    fn run_cleanup(&mut self, id: WidgetId) {
        let Some(mut widget) = self.tree.node_mut(id).and_then(|n| n.widget.take()) else {
            if self.tree.contains(id) && !self.cleanup_owed.contains(&id) {
                log::debug!("cleanup of {id:?} deferred until its handler returns");
                self.cleanup_owed.push(id);
            }
            return;
        };
        widget.cleanup(&mut EventCtx { scene: self, id });
        self.cleanup_owed.retain(|&w| w != id);
        if let Some(node) = self.tree.node_mut(id) {
            node.widget = Some(widget);
        }
    }

    fn redirect_singletons(&mut self, removed: WidgetId, to: WidgetId) {
        let inside = |w: WidgetId, tree: &WidgetTree| w == removed || tree.is_descendant_of(w, removed);
        if self.focus.is_some_and(|w| inside(w, &self.tree)) {
            log::debug!("focus moves from removed subtree {removed:?} to {to:?}");
            self.focus = Some(to);
        }
        if self.cursor.is_some_and(|w| inside(w, &self.tree)) {
            log::debug!("cursor moves from removed subtree {removed:?} to {to:?}");
            self.cursor = Some(to);
        }
    }

    // ── geometry ──────────────────────────────────────────────────────────

    /// Position relative to the parent's origin.
    pub fn position(&self, id: WidgetId) -> Point {
        self.tree.node(id).map_or(Point::zero(), |n| n.relative)
    }

    /// Position in canvas coordinates.
    pub fn absolute_position(&self, id: WidgetId) -> Point {
        self.tree.node(id).map_or(Point::zero(), |n| n.absolute)
    }

    pub fn size(&self, id: WidgetId) -> Size {
        self.tree.node(id).map_or(Size::default(), |n| n.size)
    }

    /// Bounds relative to the parent.
    pub fn bounds(&self, id: WidgetId) -> Rect {
        Rect::from_origin_size(self.position(id), self.size(id))
    }

    /// Bounds in canvas coordinates.
    pub fn absolute_bounds(&self, id: WidgetId) -> Rect {
        Rect::from_origin_size(self.absolute_position(id), self.size(id))
    }

    /// Sets the relative x and/or y of `id` and recomputes the absolute
    /// position of the whole subtree.
    pub fn reposition(&mut self, id: WidgetId, x: Option<i32>, y: Option<i32>) {
        let Some(node) = self.tree.node_mut(id) else { return };
        if let Some(x) = x {
            node.relative.x = x;
        }
        if let Some(y) = y {
            node.relative.y = y;
        }
        self.tree.update_absolute(id);
    }

    pub fn move_to(&mut self, id: WidgetId, pos: Point) {
        self.reposition(id, Some(pos.x), Some(pos.y));
    }

    pub fn move_by(&mut self, id: WidgetId, delta: Point) {
        let pos = self.position(id) + delta;
        self.move_to(id, pos);
    }

    /// Sets the width and/or height of `id` and queues `Resized` in its inbox.
    pub fn resize(&mut self, id: WidgetId, width: Option<u32>, height: Option<u32>) {
        let Some(node) = self.tree.node_mut(id) else { return };
        if let Some(w) = width {
            node.size.width = w;
        }
        if let Some(h) = height {
            node.size.height = h;
        }
        let size = node.size;
        node.inbox.push_back(Message::Resized(size));
    }

    /// Pointer position from `input` in `id`'s local coordinates.
    pub fn relative_cursor(&self, id: WidgetId, input: &dyn InputSource) -> Point {
        input.pointer() - self.absolute_position(id)
    }

    // ── appearance ────────────────────────────────────────────────────────

    pub fn opacity(&self, id: WidgetId) -> f32 {
        self.tree.node(id).map_or(0.0, |n| n.opacity)
    }

    pub fn set_opacity(&mut self, id: WidgetId, opacity: f32) {
        if let Some(node) = self.tree.node_mut(id) {
            node.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.opacity(id) > 0.0
    }

    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        self.set_opacity(id, if visible { 1.0 } else { 0.0 });
    }

    pub fn show(&mut self, id: WidgetId) {
        self.set_visible(id, true);
    }

    pub fn hide(&mut self, id: WidgetId) {
        self.set_visible(id, false);
    }

    pub fn background(&self, id: WidgetId) -> Brush {
        self.tree.node(id).map_or(Brush::default(), |n| n.background)
    }

    /// Replaces the whole background brush.
    pub fn set_brush(&mut self, id: WidgetId, brush: Brush) {
        if let Some(node) = self.tree.node_mut(id) {
            node.background = brush;
        }
    }

    /// Sets the background fill color.
    pub fn set_background(&mut self, id: WidgetId, color: Color) {
        if let Some(node) = self.tree.node_mut(id) {
            node.background.fill = color;
            node.background.fill_opacity = 1.0;
        }
    }

    /// Sets the outline color and width. A width of `0.0` disables the outline.
    pub fn set_outline(&mut self, id: WidgetId, color: Color, width: f32) {
        if let Some(node) = self.tree.node_mut(id) {
            node.background.outline = color;
            node.background.outline_width = width;
        }
    }

    // ── focus & cursor ────────────────────────────────────────────────────

    /// Widget receiving keyboard messages.
    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Widget currently under the pointer (or capturing a drag).
    pub fn cursor(&self) -> Option<WidgetId> {
        self.cursor
    }

    pub fn has_focus(&self, id: WidgetId) -> bool {
        self.focus == Some(id)
    }

    /// Gives keyboard focus to `id`. The previous holder receives `LostFocus`,
    /// `id` receives `GotFocus`.
    pub fn set_focus(&mut self, id: WidgetId) {
        if !self.tree.contains(id) || self.focus == Some(id) {
            return;
        }
        if let Some(old) = self.focus.replace(id) {
            self.post(old, Message::LostFocus);
        }
        self.post(id, Message::GotFocus);
    }

    /// Clears focus if `id` holds it, posting `LostFocus` to `id`.
    pub fn kill_focus(&mut self, id: WidgetId) {
        if self.focus == Some(id) {
            self.focus = None;
            self.post(id, Message::LostFocus);
        }
    }

    // ── messages & timers ─────────────────────────────────────────────────

    /// Appends `msg` to `target`'s inbox.
    pub fn post(&mut self, target: WidgetId, msg: Message) {
        match self.tree.node_mut(target) {
            Some(node) => node.inbox.push_back(msg),
            None => log::warn!("post: {target:?} does not exist, dropping {}", msg.code()),
        }
    }

    /// Number of undelivered messages in `id`'s inbox.
    pub fn pending(&self, id: WidgetId) -> usize {
        self.tree.node(id).map_or(0, |n| n.inbox.len())
    }

    /// Registers timer `id` for `owner`, firing every `interval_ms`.
    /// Registering an existing pair again has no effect.
    pub fn add_timer(&mut self, owner: WidgetId, id: TimerId, interval_ms: f32) {
        if !self.tree.contains(owner) {
            log::warn!("add_timer: owner {owner:?} does not exist");
            return;
        }
        if !self.timers.add(owner, id, interval_ms) {
            log::trace!("add_timer: ({owner:?}, {id}) already registered");
        }
    }

    /// Unregisters timer `id` of `owner` and drops any of its ticks still
    /// waiting in an inbox.
    pub fn kill_timer(&mut self, owner: WidgetId, id: TimerId) {
        if !self.timers.kill(owner, id) {
            log::debug!("kill_timer: ({owner:?}, {id}) not registered");
        }
        // Undelivered ticks sit somewhere between the root and the owner.
        for w in self.tree.path_to(owner) {
            if let Some(node) = self.tree.node_mut(w) {
                node.inbox.retain(|m| !m.is_timer(owner, id));
            }
        }
    }

    pub fn has_timer(&self, owner: WidgetId, id: TimerId) -> bool {
        self.timers.contains(owner, id)
    }
}

// ── EventCtx ──────────────────────────────────────────────────────────────

/// Scene access for the widget currently handling an event.
///
/// Dereferences to [`UiScene`]; the helpers here act on the handling widget
/// itself.
pub struct EventCtx<'a> {
    pub(crate) scene: &'a mut UiScene,
    pub(crate) id: WidgetId,
}

impl EventCtx<'_> {
    /// Id of the widget handling the event.
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn parent_id(&self) -> Option<WidgetId> {
        self.scene.parent(self.id)
    }

    pub fn own_size(&self) -> Size {
        self.scene.size(self.id)
    }

    pub fn has_own_focus(&self) -> bool {
        self.scene.has_focus(self.id)
    }

    pub fn take_focus(&mut self) {
        let id = self.id;
        self.scene.set_focus(id);
    }

    pub fn release_focus(&mut self) {
        let id = self.id;
        self.scene.kill_focus(id);
    }

    pub fn start_timer(&mut self, timer: TimerId, interval_ms: f32) {
        let id = self.id;
        self.scene.add_timer(id, timer, interval_ms);
    }

    pub fn stop_timer(&mut self, timer: TimerId) {
        let id = self.id;
        self.scene.kill_timer(id, timer);
    }

    /// Posts `msg` to the parent, if any.
    pub fn post_parent(&mut self, msg: Message) {
        match self.parent_id() {
            Some(parent) => self.scene.post(parent, msg),
            None => log::debug!("post_parent: {:?} has no parent", self.id),
        }
    }
}

impl Deref for EventCtx<'_> {
    type Target = UiScene;

    fn deref(&self) -> &UiScene {
        self.scene
    }
}

impl DerefMut for EventCtx<'_> {
    fn deref_mut(&mut self) -> &mut UiScene {
        self.scene
    }
}
