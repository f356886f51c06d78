//! Frame driver: message generation, inbox draining, and the draw walk.

use kinora_engine::coords::{Point, Rect};
use kinora_engine::input::InputSource;
use kinora_engine::scene::DrawList;

use crate::event::{EventResult, UiEvent};
use crate::message::Message;
use crate::messenger::{self, Route};
use crate::painter::Painter;
use crate::scene::{EventCtx, UiScene};
use crate::tree::WidgetId;

impl UiScene {
    /// Runs one frame of input and timers.
    ///
    /// Polls `input`, advances timers by `dt_ms`, posts the resulting batch
    /// to the root and drains every inbox in the tree, parents before
    /// children. Hidden widgets are drained too.
    pub fn update(&mut self, dt_ms: f32, input: &dyn InputSource) {
        self.pass += 1;
        let batch = self.generator.generate(input, &self.config.tracked_keys, &mut self.timers, dt_ms);
        let root = self.root;
        for msg in batch {
            self.post(root, msg);
        }
        self.update_widget(root);
    }

    /// Drains `id`'s inbox in FIFO order, then recurses into its children.
    ///
    /// Children are visited from a snapshot taken after the inbox is empty.
    /// A child that a handler moved elsewhere in the meantime is skipped in
    /// the snapshot. Once the children are done, skipped children and
    /// forward targets that the walk never reached are drained late, so a
    /// widget moved under an already visited sibling still gets this pass's
    /// messages.
    pub(crate) fn update_widget(&mut self, id: WidgetId) {
        let pass = self.pass;
        if let Some(node) = self.tree.node_mut(id) {
            node.drained_pass = pass;
        }
        let mut missed = Vec::new();
        loop {
            let Some(msg) = self.tree.node_mut(id).and_then(|n| n.inbox.pop_front()) else {
                break;
            };
            match messenger::resolve(self, id, &msg) {
                Route::Local => self.deliver(id, msg),
                Route::Forward(target) => {
                    self.post(target, msg);
                    if !missed.contains(&target) {
                        missed.push(target);
                    }
                }
                Route::Drop => log::trace!("widget {id:?} dropped {}", msg.code()),
            }
        }

        if !self.tree.contains(id) {
            return;
        }
        let children = self.tree.children(id).to_vec();
        for child in children {
            if self.tree.parent(child) == Some(id) {
                self.update_widget(child);
            } else {
                missed.push(child);
            }
        }

        for w in missed {
            let undrained = self.tree.node(w).is_some_and(|n| n.drained_pass != pass);
            if undrained && self.tree.root_of(w) == self.root {
                log::trace!("widget {w:?} moved during the walk, draining it late");
                self.update_widget(w);
            }
        }
    }

    /// Hands `msg` to the widget at `id`. The message and its payload are
    /// dropped when this returns.
    fn deliver(&mut self, id: WidgetId, msg: Message) {
        let code = msg.code();
        let origin = self.absolute_position(id);
        let event = to_event(&msg, origin);

        let Some(mut widget) = self.tree.node_mut(id).and_then(|n| n.widget.take()) else {
            log::warn!("widget {id:?} is busy, dropping {code}");
            return;
        };

        let result = widget.on_event(&event, &mut EventCtx { scene: self, id });
        match result {
            EventResult::Consumed => log::trace!("widget {id:?} <- {code}"),
            EventResult::Ignored => log::trace!("widget {id:?} <- {code} (ignored)"),
        }

        if let Some(at) = self.cleanup_owed.iter().position(|&w| w == id) {
            self.cleanup_owed.swap_remove(at);
            widget.cleanup(&mut EventCtx { scene: self, id });
        }

        // The handler may have destroyed its own widget.
        if let Some(node) = self.tree.node_mut(id) {
            node.widget = Some(widget);
        }
    }

    /// Records the whole visible tree into `list`, back to front.
    ///
    /// For each visible widget: background rectangle, the widget's own
    /// [`paint`](crate::widget::Widget::paint), then its children.
    /// Zero-opacity widgets are skipped with their subtree.
    pub fn draw(&self, list: &mut DrawList) {
        self.draw_widget(self.root, list);
    }

    fn draw_widget(&self, id: WidgetId, list: &mut DrawList) {
        let Some(node) = self.tree.node(id) else { return };
        if node.opacity <= 0.0 {
            return;
        }

        {
            let mut painter = Painter::new(list, self.config.canvas, node.absolute, node.size, node.opacity);
            painter.rect(Rect::from_origin_size(Point::zero(), node.size), node.background);
            if let Some(widget) = node.widget.as_deref() {
                widget.paint(&mut painter);
            }
        }

        for &child in &node.children {
            self.draw_widget(child, list);
        }
    }
}

fn to_event(msg: &Message, origin: Point) -> UiEvent<'_> {
    match msg {
        Message::MousePressed { button, pos } => UiEvent::MousePressed { button: *button, pos: *pos - origin },
        Message::MouseReleased { button, pos } => UiEvent::MouseReleased { button: *button, pos: *pos - origin },
        Message::MouseMove { pos, buttons } if buttons.dragging() => {
            UiEvent::Drag { pos: *pos - origin, buttons: *buttons }
        }
        Message::MouseMove { pos, buttons } => UiEvent::MouseMove { pos: *pos - origin, buttons: *buttons },
        Message::MouseEnter(buttons) => UiEvent::MouseEnter { buttons: *buttons },
        Message::MouseLeft(buttons) => UiEvent::MouseLeft { buttons: *buttons },
        Message::KeyPressed(info) => UiEvent::KeyPressed(*info),
        Message::KeyReleased(info) => UiEvent::KeyReleased(*info),
        Message::Timer { id, .. } => UiEvent::Timer(*id),
        Message::Resized(size) => UiEvent::Resized(*size),
        Message::GotFocus => UiEvent::GotFocus,
        Message::LostFocus => UiEvent::LostFocus,
        Message::Custom(custom) => UiEvent::Custom(custom),
    }
}
