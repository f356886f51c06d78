use kinora_engine::coords::{Point, Size};
use kinora_engine::input::{MouseButton, MouseButtons};

use crate::message::{CustomMessage, KeyInfo};
use crate::timer::TimerId;

/// Message as seen by [`Widget::on_event`](crate::widget::Widget::on_event).
///
/// Pointer positions are local to the receiving widget (its top-left corner
/// is `(0, 0)`).
#[derive(Debug)]
pub enum UiEvent<'a> {
    MousePressed { button: MouseButton, pos: Point },
    MouseReleased { button: MouseButton, pos: Point },
    /// Pointer moved over the widget with no drag button held.
    MouseMove { pos: Point, buttons: MouseButtons },
    /// Pointer moved while left or right is held. Delivered to the widget the
    /// drag started on, even once the pointer has left its bounds.
    Drag { pos: Point, buttons: MouseButtons },
    MouseEnter { buttons: MouseButtons },
    MouseLeft { buttons: MouseButtons },
    KeyPressed(KeyInfo),
    KeyReleased(KeyInfo),
    Timer(TimerId),
    Resized(Size),
    GotFocus,
    LostFocus,
    Custom(&'a CustomMessage),
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
///
/// Routing is decided before delivery, so this only feeds dispatch tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled.
    Consumed,
    /// Widget has no handler for this event.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
