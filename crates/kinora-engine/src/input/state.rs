use std::collections::HashSet;

use super::types::{InputEvent, Key, Modifiers, MouseButton, MouseButtons};

/// Level snapshot of one window's input.
///
/// Edges (pressed/released this frame) are not stored; whoever polls the
/// state derives them by diffing against its own previous frame.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Last known pointer position in window-logical pixels.
    pub pointer_pos: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = m,
            InputEvent::Focused(f) => {
                self.focused = f;
                // The release of anything held may land in another window.
                if !f {
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }
            InputEvent::PointerMoved { x, y } => self.pointer_pos = Some((x, y)),
            // A drag that leaves the window keeps reporting where it exited.
            InputEvent::PointerLeft => {}
            InputEvent::Key { key, pressed } => set_held(&mut self.keys_down, key, pressed),
            InputEvent::PointerButton { button, pressed } => {
                set_held(&mut self.buttons_down, button, pressed)
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    pub fn mouse_buttons(&self) -> MouseButtons {
        MouseButtons {
            left: self.button_down(MouseButton::Left),
            right: self.button_down(MouseButton::Right),
            middle: self.button_down(MouseButton::Middle),
        }
    }
}

fn set_held<T: Eq + std::hash::Hash>(set: &mut HashSet<T>, item: T, held: bool) {
    if held {
        set.insert(item);
    } else {
        set.remove(&item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_press_and_release_update_held_set() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::PointerButton { button: MouseButton::Left, pressed: true });
        assert!(st.button_down(MouseButton::Left));
        assert!(st.mouse_buttons().dragging());

        st.apply_event(&InputEvent::PointerButton { button: MouseButton::Left, pressed: false });
        assert!(!st.button_down(MouseButton::Left));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::ModifiersChanged(Modifiers { shift: true, ..Default::default() }));
        st.apply_event(&InputEvent::Key { key: Key::A, pressed: true });
        assert!(st.key_down(Key::A));
        assert!(st.modifiers.shift);

        st.apply_event(&InputEvent::Focused(false));
        assert!(!st.key_down(Key::A));
    }

    #[test]
    fn pointer_left_keeps_last_position() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::PointerMoved { x: 1.0, y: 2.0 });
        st.apply_event(&InputEvent::PointerLeft);
        assert_eq!(st.pointer_pos, Some((1.0, 2.0)));
    }
}
