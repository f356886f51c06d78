//! Message envelopes queued in widget inboxes.
//!
//! A [`Message`] is a plain value: whatever payload it carries is owned by the
//! inbox it sits in and dropped exactly once, after the handler that consumed
//! it returns (or when the message is purged/dropped undelivered).

use std::any::Any;
use std::fmt;

use kinora_engine::coords::{Point, Size};
use kinora_engine::input::{Key, Modifiers, MouseButton, MouseButtons};

use crate::timer::TimerId;
use crate::tree::WidgetId;

/// Keyboard payload of [`Message::KeyPressed`] / [`Message::KeyReleased`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyInfo {
    pub key: Key,
    /// Character printed on the key cap, see [`Key::base_char`].
    pub ch: Option<char>,
    pub shift: bool,
    pub ctrl: bool,
}

impl KeyInfo {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            ch: key.base_char(),
            shift: modifiers.shift,
            ctrl: modifiers.ctrl,
        }
    }
}

/// Application-defined message.
///
/// `id` is chosen by the application; `data` is an optional owned payload,
/// read back with [`CustomMessage::data`].
pub struct CustomMessage {
    pub id: u32,
    pub data: Option<Box<dyn Any>>,
}

impl CustomMessage {
    pub fn new(id: u32) -> Self {
        Self { id, data: None }
    }

    pub fn with_data<T: Any>(id: u32, data: T) -> Self {
        Self { id, data: Some(Box::new(data)) }
    }

    /// Returns the payload if it is a `T`.
    pub fn data<T: Any>(&self) -> Option<&T> {
        self.data.as_ref()?.downcast_ref::<T>()
    }
}

impl fmt::Debug for CustomMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomMessage")
            .field("id", &self.id)
            .field("data", &self.data.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Queued message.
///
/// Pointer positions are absolute canvas coordinates; they are translated into
/// the receiver's local space when the message is delivered.
#[derive(Debug)]
pub enum Message {
    MousePressed { button: MouseButton, pos: Point },
    MouseReleased { button: MouseButton, pos: Point },
    /// Pointer moved. Delivered as a drag when `buttons.dragging()`.
    MouseMove { pos: Point, buttons: MouseButtons },
    MouseEnter(MouseButtons),
    MouseLeft(MouseButtons),
    KeyPressed(KeyInfo),
    KeyReleased(KeyInfo),
    /// Timer `id` registered by `owner` reached its interval.
    Timer { owner: WidgetId, id: TimerId },
    Resized(Size),
    GotFocus,
    LostFocus,
    Custom(CustomMessage),
}

impl Message {
    pub fn code(&self) -> MessageCode {
        match self {
            Message::MousePressed { .. } => MessageCode::MousePressed,
            Message::MouseReleased { .. } => MessageCode::MouseReleased,
            Message::MouseMove { buttons, .. } if buttons.dragging() => MessageCode::DraggingMouse,
            Message::MouseMove { .. } => MessageCode::MovingMouse,
            Message::MouseEnter(_) => MessageCode::MouseEnter,
            Message::MouseLeft(_) => MessageCode::MouseLeft,
            Message::KeyPressed(_) => MessageCode::KeyPressed,
            Message::KeyReleased(_) => MessageCode::KeyReleased,
            Message::Timer { .. } => MessageCode::Timer,
            Message::Resized(_) => MessageCode::Resized,
            Message::GotFocus => MessageCode::GotFocus,
            Message::LostFocus => MessageCode::LostFocus,
            Message::Custom(_) => MessageCode::Custom,
        }
    }

    /// Custom message without payload.
    pub fn custom(id: u32) -> Self {
        Message::Custom(CustomMessage::new(id))
    }

    /// Custom message carrying `data`.
    pub fn custom_with<T: Any>(id: u32, data: T) -> Self {
        Message::Custom(CustomMessage::with_data(id, data))
    }

    pub(crate) fn is_timer(&self, owner: WidgetId, id: TimerId) -> bool {
        matches!(self, Message::Timer { owner: o, id: i } if *o == owner && *i == id)
    }

    pub(crate) fn is_timer_of(&self, owner: WidgetId) -> bool {
        matches!(self, Message::Timer { owner: o, .. } if *o == owner)
    }
}

/// Payload-free tag of a [`Message`], used for logging.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MessageCode {
    MousePressed,
    MouseReleased,
    MovingMouse,
    DraggingMouse,
    MouseEnter,
    MouseLeft,
    KeyPressed,
    KeyReleased,
    Timer,
    Resized,
    GotFocus,
    LostFocus,
    Custom,
}

impl MessageCode {
    pub fn name(self) -> &'static str {
        match self {
            MessageCode::MousePressed => "MOUSE_PRESSED",
            MessageCode::MouseReleased => "MOUSE_RELEASED",
            MessageCode::MovingMouse => "MOVING_MOUSE",
            MessageCode::DraggingMouse => "DRAGGING_MOUSE",
            MessageCode::MouseEnter => "MOUSE_ENTER",
            MessageCode::MouseLeft => "MOUSE_LEFT",
            MessageCode::KeyPressed => "KEY_PRESSED",
            MessageCode::KeyReleased => "KEY_RELEASED",
            MessageCode::Timer => "TIMER",
            MessageCode::Resized => "WINDOW_RESIZED",
            MessageCode::GotFocus => "GOT_FOCUS",
            MessageCode::LostFocus => "LOST_FOCUS",
            MessageCode::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_info_takes_char_and_modifiers() {
        let info = KeyInfo::new(Key::Digit4, Modifiers { shift: true, ..Default::default() });
        assert_eq!(info.ch, Some('4'));
        assert!(info.shift);
        assert!(!info.ctrl);
    }

    #[test]
    fn custom_payload_is_typed() {
        let msg = CustomMessage::with_data(3, String::from("Solaris"));
        assert_eq!(msg.data::<String>().map(String::as_str), Some("Solaris"));
        assert!(msg.data::<u32>().is_none());
        assert!(CustomMessage::new(3).data::<String>().is_none());
    }

    #[test]
    fn drag_moves_have_their_own_code() {
        let pos = Point::new(1, 1);
        let idle = Message::MouseMove { pos, buttons: MouseButtons::default() };
        let drag = Message::MouseMove {
            pos,
            buttons: MouseButtons { right: true, ..Default::default() },
        };
        assert_eq!(idle.code().to_string(), "MOVING_MOUSE");
        assert_eq!(drag.code(), MessageCode::DraggingMouse);
    }
}
