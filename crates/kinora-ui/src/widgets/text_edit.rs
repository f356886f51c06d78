use kinora_engine::coords::Point;
use kinora_engine::input::{Key, MouseButton};
use kinora_engine::paint::Color;

use crate::event::{EventResult, UiEvent};
use crate::message::KeyInfo;
use crate::painter::Painter;
use crate::scene::EventCtx;
use crate::timer::TimerId;
use crate::widget::Widget;

/// Timer driving the caret blink of a focused [`TextEdit`].
pub const CARET_TIMER: TimerId = 0xCA;

const CARET_BLINK_MS: f32 = 500.0;

/// Reusable single-line editing state (text plus caret).
///
/// The caret is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextEditState {
    pub text: String,
    pub cursor: usize,
}

impl TextEditState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_char(&self.text, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_char(&self.text, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace. Returns `true` if the text changed.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = prev_char(&self.text, self.cursor);
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    /// Delete key. Returns `true` if the text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = next_char(&self.text, self.cursor);
        self.text.drain(self.cursor..next);
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Applies one key press. Returns `(handled, text_changed)`.
    ///
    /// Enter and Escape are not handled here; they mean submit/defocus to the
    /// owning widget.
    pub fn apply_key(&mut self, info: &KeyInfo) -> (bool, bool) {
        match info.key {
            Key::Backspace => (true, self.delete_backward()),
            Key::Delete => (true, self.delete_forward()),
            Key::ArrowLeft => {
                self.move_left();
                (true, false)
            }
            Key::ArrowRight => {
                self.move_right();
                (true, false)
            }
            Key::Home => {
                self.move_home();
                (true, false)
            }
            Key::End => {
                self.move_end();
                (true, false)
            }
            Key::Enter | Key::Escape | Key::Tab => (false, false),
            _ => match printable(info) {
                Some(c) => {
                    self.insert_char(c);
                    (true, true)
                }
                None => (false, false),
            },
        }
    }
}

/// Character a key press types, honouring shift for letters.
fn printable(info: &KeyInfo) -> Option<char> {
    let c = info.ch?;
    if c.is_control() || info.ctrl {
        return None;
    }
    Some(if info.shift { c } else { c.to_ascii_lowercase() })
}

type TextHandler = Box<dyn FnMut(&str, &mut EventCtx<'_>)>;

/// Single-line text input.
///
/// Takes keyboard focus when pressed and edits its text from key messages.
/// While focused the caret blinks on a timer; Escape drops focus, Enter
/// calls the submit handler.
pub struct TextEdit {
    state: TextEditState,
    placeholder: String,
    text_size: f32,
    text_color: Color,
    placeholder_color: Color,
    on_change: Option<TextHandler>,
    on_submit: Option<TextHandler>,

    focused: bool,
    caret_visible: bool,
}

impl TextEdit {
    pub fn new() -> Self {
        Self {
            state: TextEditState::default(),
            placeholder: String::new(),
            text_size: 14.0,
            text_color: Color::WHITE,
            placeholder_color: Color::from_rgb_u8(120, 120, 130),
            on_change: None,
            on_submit: None,
            focused: false,
            caret_visible: false,
        }
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&str, &mut EventCtx<'_>) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_submit(mut self, f: impl FnMut(&str, &mut EventCtx<'_>) + 'static) -> Self {
        self.on_submit = Some(Box::new(f));
        self
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state = TextEditState::new(text);
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }
}

impl Default for TextEdit { fn default() -> Self { Self::new() } }

impl Widget for TextEdit {
    fn on_event(&mut self, event: &UiEvent<'_>, ctx: &mut EventCtx<'_>) -> EventResult {
        match event {
            UiEvent::MousePressed { button: MouseButton::Left, .. } => ctx.take_focus(),
            UiEvent::GotFocus => {
                self.focused = true;
                self.caret_visible = true;
                ctx.start_timer(CARET_TIMER, CARET_BLINK_MS);
            }
            UiEvent::LostFocus => {
                self.focused = false;
                self.caret_visible = false;
                ctx.stop_timer(CARET_TIMER);
            }
            UiEvent::Timer(CARET_TIMER) => self.caret_visible = !self.caret_visible,
            UiEvent::KeyPressed(info) => match info.key {
                Key::Escape => ctx.release_focus(),
                Key::Enter => {
                    if let Some(f) = &mut self.on_submit {
                        f(&self.state.text, ctx);
                    }
                }
                _ => {
                    let (handled, changed) = self.state.apply_key(info);
                    if changed {
                        if let Some(f) = &mut self.on_change {
                            f(&self.state.text, ctx);
                        }
                    }
                    if !handled {
                        return EventResult::Ignored;
                    }
                    // Keep the caret solid while typing.
                    self.caret_visible = true;
                }
            },
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn paint(&self, painter: &mut Painter<'_>) {
        let height = painter.size().height as f32;
        let baseline = ((height + self.text_size) * 0.5) as i32;
        if self.state.text.is_empty() && !self.focused {
            painter.text(self.placeholder.clone(), self.text_size, Point::new(6, baseline), self.placeholder_color);
            return;
        }
        painter.text(self.state.text.clone(), self.text_size, Point::new(6, baseline), self.text_color);

        if self.caret_visible {
            // Monospace estimate; real glyph metrics belong to the presenter.
            let advance = self.text_size * 0.6;
            let chars = self.state.text[..self.state.cursor].chars().count() as f32;
            let x = 6 + (chars * advance).round() as i32;
            let top = baseline - self.text_size as i32;
            painter.line(Point::new(x, top), Point::new(x, baseline + 2), self.text_color, 1.0);
        }
    }
}

// ── UTF-8 helpers ─────────────────────────────────────────────────────────

/// Step one codepoint boundary backward from `from`.
fn prev_char(s: &str, from: usize) -> usize {
    if from == 0 { return 0; }
    let mut i = from - 1;
    while !s.is_char_boundary(i) { i -= 1; }
    i
}

/// Step one codepoint boundary forward from `from`.
fn next_char(s: &str, from: usize) -> usize {
    if from >= s.len() { return s.len(); }
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) { i += 1; }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinora_engine::input::Modifiers;

    fn key(k: Key) -> KeyInfo {
        KeyInfo::new(k, Modifiers::default())
    }

    #[test]
    fn typing_lowercases_without_shift() {
        let mut st = TextEditState::default();
        st.apply_key(&key(Key::M));
        st.apply_key(&KeyInfo::new(Key::A, Modifiers { shift: true, ..Default::default() }));
        st.apply_key(&key(Key::Space));
        st.apply_key(&key(Key::Digit8));
        assert_eq!(st.text, "mA 8");
        assert_eq!(st.cursor, 4);
    }

    #[test]
    fn editing_keys_move_and_delete() {
        let mut st = TextEditState::new("alien");
        st.apply_key(&key(Key::Home));
        assert_eq!(st.apply_key(&key(Key::Delete)), (true, true));
        st.apply_key(&key(Key::End));
        st.apply_key(&key(Key::ArrowLeft));
        assert_eq!(st.apply_key(&key(Key::Backspace)), (true, true));
        assert_eq!(st.text, "lin");
        assert_eq!(st.apply_key(&key(Key::Enter)), (false, false));
    }

    #[test]
    fn caret_respects_char_boundaries() {
        let mut st = TextEditState::new("amélie");
        st.move_home();
        st.move_right();
        st.move_right();
        st.move_right();
        assert_eq!(&st.text[..st.cursor], "amé");
        st.delete_backward();
        assert_eq!(st.text, "amlie");
    }

    #[test]
    fn ctrl_chords_do_not_type() {
        let mut st = TextEditState::default();
        let info = KeyInfo::new(Key::C, Modifiers { ctrl: true, ..Default::default() });
        assert_eq!(st.apply_key(&info), (false, false));
        assert!(st.text.is_empty());
    }
}
