//! Target resolution for queued messages.
//!
//! When a widget drains a message from its inbox, [`resolve`] decides whether
//! the widget handles it itself, forwards it to another widget's inbox, or
//! drops it. Resolution is idempotent: a forwarded message resolves to
//! [`Route::Local`] once it reaches its target.
//!
//! | message                    | routed to                                  |
//! |----------------------------|--------------------------------------------|
//! | press                      | topmost visible widget under the point,    |
//! |                            | which also becomes the cursor widget       |
//! | release                    | topmost visible widget under the point     |
//! | move (no drag button held) | topmost visible widget under the point     |
//! | move while dragging        | cursor widget, no hit test                 |
//! | key press / release        | focus widget, dropped without focus        |
//! | timer                      | owning widget, dropped if it is gone or    |
//! |                            | not attached under the root                |
//! | everything else            | the widget whose inbox it was posted to    |

use kinora_engine::coords::Point;
use kinora_engine::input::{MouseButton, MouseButtons};

use crate::message::Message;
use crate::scene::UiScene;
use crate::tree::WidgetId;

/// Outcome of [`resolve`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Route {
    /// Deliver to the widget that drained the message.
    Local,
    /// Re-post to this widget's inbox.
    Forward(WidgetId),
    /// Nobody should receive it.
    Drop,
}

impl Route {
    fn to(target: WidgetId, at: WidgetId) -> Self {
        if target == at { Route::Local } else { Route::Forward(target) }
    }
}

/// Resolves the receiver of `msg`, drained by `at`.
///
/// Pointer moves and presses also update the cursor widget, posting
/// `MouseLeft` and `MouseEnter` to the widgets the pointer left and entered.
/// A drag therefore stays with the widget the press landed on.
pub fn resolve(scene: &mut UiScene, at: WidgetId, msg: &Message) -> Route {
    match msg {
        Message::MousePressed { button, pos } => {
            let target = hit_test(scene, at, *pos);
            update_cursor(scene, target, held(*button));
            Route::to(target, at)
        }

        Message::MouseReleased { pos, .. } => Route::to(hit_test(scene, at, *pos), at),

        Message::MouseMove { pos, buttons } => {
            if buttons.dragging() {
                if let Some(cursor) = scene.cursor.filter(|&c| scene.tree.contains(c)) {
                    return Route::to(cursor, at);
                }
            }
            let target = hit_test(scene, at, *pos);
            update_cursor(scene, target, *buttons);
            Route::to(target, at)
        }

        Message::KeyPressed(_) | Message::KeyReleased(_) => match scene.focus {
            Some(focus) if scene.tree.contains(focus) => Route::to(focus, at),
            _ => Route::Drop,
        },

        // A detached owner is never drained; its ticks would pile up.
        Message::Timer { owner, .. } => {
            if scene.tree.contains(*owner) && scene.tree.root_of(*owner) == scene.root {
                Route::to(*owner, at)
            } else {
                Route::Drop
            }
        }

        Message::MouseEnter(_)
        | Message::MouseLeft(_)
        | Message::Resized(_)
        | Message::GotFocus
        | Message::LostFocus
        | Message::Custom(_) => Route::Local,
    }
}

/// Finds the deepest visible widget under `pos` (canvas coordinates),
/// starting at `at`.
///
/// At each level the point is translated into the current widget's local
/// space and children are scanned topmost first; the first child whose
/// bounds contain the point is descended into. Zero-opacity children are
/// skipped. Returns `at` itself if no child matches.
pub fn hit_test(scene: &UiScene, at: WidgetId, pos: Point) -> WidgetId {
    let mut target = at;
    let mut local = pos - scene.absolute_position(at);

    'descend: loop {
        for &child in scene.tree.children(target).iter().rev() {
            let Some(node) = scene.tree.node(child) else { continue };
            if node.opacity <= 0.0 {
                continue;
            }
            if scene.bounds(child).contains(local) {
                local -= node.relative;
                target = child;
                continue 'descend;
            }
        }
        return target;
    }
}

fn held(button: MouseButton) -> MouseButtons {
    MouseButtons {
        left: button == MouseButton::Left,
        right: button == MouseButton::Right,
        middle: button == MouseButton::Middle,
    }
}

/// Makes `target` the cursor widget.
///
/// Leave goes to every widget on the old root→cursor path that is not on the
/// new one (innermost first), enter to every widget on the new path that was
/// not on the old one (outermost first).
fn update_cursor(scene: &mut UiScene, target: WidgetId, buttons: MouseButtons) {
    if scene.cursor == Some(target) {
        return;
    }

    let old_path = match scene.cursor {
        Some(cursor) => scene.tree.path_to(cursor),
        None => Vec::new(),
    };
    let new_path = scene.tree.path_to(target);
    let shared = old_path
        .iter()
        .zip(&new_path)
        .take_while(|(a, b)| a == b)
        .count();

    for &left in old_path[shared..].iter().rev() {
        scene.post(left, Message::MouseLeft(buttons));
    }
    for &entered in &new_path[shared..] {
        scene.post(entered, Message::MouseEnter(buttons));
    }

    log::trace!("cursor {:?} -> {:?}", scene.cursor, target);
    scene.cursor = Some(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::UiConfig;
    use crate::widgets::Panel;
    use kinora_engine::coords::{Rect, Size};
    use kinora_engine::input::MouseButton;

    fn scene() -> UiScene {
        UiScene::new(UiConfig { canvas: Size::new(200, 200), ..UiConfig::default() })
    }

    #[test]
    fn topmost_sibling_wins() {
        let mut s = scene();
        let root = s.root();
        let below = s.add(root, Panel, Rect::new(10, 10, 50, 50));
        let above = s.add(root, Panel, Rect::new(30, 30, 50, 50));

        assert_eq!(hit_test(&s, root, Point::new(40, 40)), above);
        assert_eq!(hit_test(&s, root, Point::new(15, 15)), below);
        assert_eq!(hit_test(&s, root, Point::new(150, 150)), root);

        s.bring_to_top(below);
        assert_eq!(hit_test(&s, root, Point::new(40, 40)), below);
    }

    #[test]
    fn descends_and_skips_hidden() {
        let mut s = scene();
        let root = s.root();
        let outer = s.add(root, Panel, Rect::new(10, 10, 100, 100));
        let inner = s.add(outer, Panel, Rect::new(10, 10, 20, 20));
        let cover = s.add(root, Panel, Rect::new(0, 0, 40, 40));
        s.hide(cover);

        assert_eq!(hit_test(&s, root, Point::new(25, 25)), inner);
        // Shared edge is inside (inclusive bounds).
        assert_eq!(hit_test(&s, root, Point::new(40, 40)), inner);
        assert_eq!(hit_test(&s, root, Point::new(41, 41)), outer);
        // Starting below the root works in absolute coordinates too.
        assert_eq!(hit_test(&s, outer, Point::new(25, 25)), inner);
    }

    #[test]
    fn keys_without_focus_are_dropped() {
        let mut s = scene();
        let root = s.root();
        let key = Message::KeyPressed(crate::message::KeyInfo::new(
            kinora_engine::input::Key::A,
            Default::default(),
        ));
        assert_eq!(resolve(&mut s, root, &key), Route::Drop);

        let edit = s.add(root, Panel, Rect::new(0, 0, 10, 10));
        s.set_focus(edit);
        assert_eq!(resolve(&mut s, root, &key), Route::Forward(edit));
        assert_eq!(resolve(&mut s, edit, &key), Route::Local);
    }

    #[test]
    fn press_resolves_to_hit_widget() {
        let mut s = scene();
        let root = s.root();
        let b = s.add(root, Panel, Rect::new(10, 10, 50, 50));
        let press = Message::MousePressed { button: MouseButton::Left, pos: Point::new(15, 15) };
        assert_eq!(resolve(&mut s, root, &press), Route::Forward(b));
        assert_eq!(resolve(&mut s, b, &press), Route::Local);
    }

    #[test]
    fn enter_and_leave_follow_the_path_difference() {
        let mut s = scene();
        let root = s.root();
        let a = s.add(root, Panel, Rect::new(0, 0, 100, 100));
        let a1 = s.add(a, Panel, Rect::new(0, 0, 10, 10));
        let b = s.add(root, Panel, Rect::new(120, 0, 50, 50));

        let idle = MouseButtons::default();
        update_cursor(&mut s, a1, idle);
        assert_eq!((s.pending(root), s.pending(a), s.pending(a1)), (1, 1, 1));

        update_cursor(&mut s, b, idle);
        // a1 and a were left, b entered, root unchanged.
        assert_eq!((s.pending(root), s.pending(a), s.pending(a1), s.pending(b)), (1, 2, 2, 1));
        assert_eq!(s.cursor(), Some(b));

        update_cursor(&mut s, b, idle);
        assert_eq!(s.pending(b), 1);
    }

    #[test]
    fn press_takes_the_cursor() {
        let mut s = scene();
        let root = s.root();
        let b = s.add(root, Panel, Rect::new(10, 10, 50, 50));
        let cover = s.add(root, Panel, Rect::new(10, 10, 50, 50));
        s.cursor = Some(cover);
        s.hide(cover);

        let press = Message::MousePressed { button: MouseButton::Left, pos: Point::new(15, 15) };
        assert_eq!(resolve(&mut s, root, &press), Route::Forward(b));
        assert_eq!(s.cursor(), Some(b));
        assert_eq!((s.pending(cover), s.pending(b)), (1, 1));
    }

    #[test]
    fn ticks_of_detached_owners_are_dropped() {
        let mut s = scene();
        let root = s.root();
        let a = s.add(root, Panel, Rect::new(0, 0, 10, 10));
        let tick = Message::Timer { owner: a, id: 1 };
        assert_eq!(resolve(&mut s, root, &tick), Route::Forward(a));

        s.detach(a);
        assert_eq!(resolve(&mut s, root, &tick), Route::Drop);
        s.attach(a, root);
        assert_eq!(resolve(&mut s, root, &tick), Route::Forward(a));
    }
}
