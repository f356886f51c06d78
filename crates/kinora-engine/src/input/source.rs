use crate::coords::{CanvasSpace, Point};

use super::state::InputState;
use super::types::{Key, Modifiers, MouseButton, MouseButtons};

/// Synchronous input queries polled once per frame.
///
/// Positions are in canvas units. Implementations report *levels* (is the
/// button held right now); edge detection belongs to the poller.
pub trait InputSource {
    /// Absolute pointer position on the canvas.
    fn pointer(&self) -> Point;

    fn button_down(&self, button: MouseButton) -> bool;

    fn key_down(&self, key: Key) -> bool;

    fn modifiers(&self) -> Modifiers;

    fn mouse_buttons(&self) -> MouseButtons {
        MouseButtons {
            left: self.button_down(MouseButton::Left),
            right: self.button_down(MouseButton::Right),
            middle: self.button_down(MouseButton::Middle),
        }
    }
}

/// [`InputSource`] view of a window's [`InputState`], mapped onto the canvas.
pub struct CanvasInput<'a> {
    state: &'a InputState,
    window_size: (f32, f32),
    canvas: CanvasSpace,
}

impl<'a> CanvasInput<'a> {
    pub fn new(state: &'a InputState, window_size: (f32, f32), canvas: CanvasSpace) -> Self {
        Self { state, window_size, canvas }
    }
}

impl InputSource for CanvasInput<'_> {
    fn pointer(&self) -> Point {
        match self.state.pointer_pos {
            Some(pos) => self.canvas.to_canvas(self.window_size, pos),
            None => Point::zero(),
        }
    }

    fn button_down(&self, button: MouseButton) -> bool {
        self.state.button_down(button)
    }

    fn key_down(&self, key: Key) -> bool {
        self.state.key_down(key)
    }

    fn modifiers(&self) -> Modifiers {
        self.state.modifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    #[test]
    fn pointer_is_mapped_to_canvas() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::PointerMoved { x: 50.0, y: 40.0 });
        // 2x window: canvas units are half the window pixels.
        let input = CanvasInput::new(&st, (400.0, 200.0), CanvasSpace::new(200, 100));
        assert_eq!(input.pointer(), Point::new(25, 20));
    }

    #[test]
    fn missing_pointer_reports_origin() {
        let st = InputState::default();
        let input = CanvasInput::new(&st, (200.0, 100.0), CanvasSpace::new(200, 100));
        assert_eq!(input.pointer(), Point::zero());
        assert!(!input.mouse_buttons().left);
    }
}
