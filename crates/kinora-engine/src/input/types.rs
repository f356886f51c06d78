use std::fmt;

/// Keyboard key identifier.
///
/// The runtime maps platform scancodes/keycodes into these variants where possible.
/// For unsupported keys, use `Key::Unknown(u32)` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers as keys (useful for focus/navigation policies)
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Punctuation
    Minus, Equal, BracketLeft, BracketRight, Backslash,
    Semicolon, Quote, Backquote, Comma, Period, Slash,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Platform-dependent key not yet represented here.
    Unknown(u32),
}

impl Key {
    /// Keys polled for press/release edges by default.
    ///
    /// Letters, digits, the editing/navigation keys and punctuation: every key
    /// that produces a character or moves a caret.
    pub const TRACKED: &'static [Key] = &[
        Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
        Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
        Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
        Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4, Key::Digit5,
        Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9, Key::Digit0,
        Key::Enter, Key::Escape, Key::Backspace, Key::Tab, Key::Space,
        Key::Minus, Key::Equal, Key::BracketLeft, Key::BracketRight, Key::Backslash,
        Key::Semicolon, Key::Quote, Key::Backquote, Key::Comma, Key::Period, Key::Slash,
        Key::Delete, Key::Home, Key::End,
        Key::ArrowLeft, Key::ArrowRight, Key::ArrowUp, Key::ArrowDown,
    ];

    /// Character printed on the key cap.
    ///
    /// Letters are reported uppercase regardless of modifiers; consumers apply
    /// shift/caps policy themselves.
    pub fn base_char(self) -> Option<char> {
        let c = match self {
            Key::A => 'A', Key::B => 'B', Key::C => 'C', Key::D => 'D', Key::E => 'E',
            Key::F => 'F', Key::G => 'G', Key::H => 'H', Key::I => 'I', Key::J => 'J',
            Key::K => 'K', Key::L => 'L', Key::M => 'M', Key::N => 'N', Key::O => 'O',
            Key::P => 'P', Key::Q => 'Q', Key::R => 'R', Key::S => 'S', Key::T => 'T',
            Key::U => 'U', Key::V => 'V', Key::W => 'W', Key::X => 'X', Key::Y => 'Y',
            Key::Z => 'Z',

            Key::Digit0 => '0', Key::Digit1 => '1', Key::Digit2 => '2', Key::Digit3 => '3',
            Key::Digit4 => '4', Key::Digit5 => '5', Key::Digit6 => '6', Key::Digit7 => '7',
            Key::Digit8 => '8', Key::Digit9 => '9',

            Key::Enter => '\n',
            Key::Escape => '\x1b',
            Key::Backspace => '\u{8}',
            Key::Tab => '\t',
            Key::Space => ' ',

            Key::Minus => '-', Key::Equal => '=', Key::BracketLeft => '[',
            Key::BracketRight => ']', Key::Backslash => '\\', Key::Semicolon => ';',
            Key::Quote => '\'', Key::Backquote => '`', Key::Comma => ',',
            Key::Period => '.', Key::Slash => '/',

            _ => return None,
        };
        Some(c)
    }
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Held state of the three primary mouse buttons.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct MouseButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl MouseButtons {
    /// Returns `true` while a button that starts a drag (left or right) is held.
    #[inline]
    pub fn dragging(&self) -> bool {
        self.left || self.right
    }
}

/// Level changes reported by the window runtime.
///
/// Only what [`InputState`](super::InputState) keeps is carried: which keys
/// and buttons are held, where the pointer is, the modifiers and window
/// focus. Positions are window-logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    Key { key: Key, pressed: bool },
    PointerMoved { x: f32, y: f32 },
    PointerButton { button: MouseButton, pressed: bool },
    /// Pointer left the window surface.
    PointerLeft,
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_uppercase() {
        assert_eq!(Key::A.base_char(), Some('A'));
        assert_eq!(Key::Z.base_char(), Some('Z'));
    }

    #[test]
    fn control_keys_map_to_control_chars() {
        assert_eq!(Key::Enter.base_char(), Some('\n'));
        assert_eq!(Key::Backspace.base_char(), Some('\u{8}'));
        assert_eq!(Key::Backslash.base_char(), Some('\\'));
    }

    #[test]
    fn navigation_keys_have_no_char() {
        assert_eq!(Key::ArrowLeft.base_char(), None);
        assert_eq!(Key::Unknown(7).base_char(), None);
    }

    #[test]
    fn tracked_keys_are_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(Key::TRACKED.iter().all(|k| seen.insert(*k)));
    }
}