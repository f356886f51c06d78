use kinora_engine::coords::Point;
use kinora_engine::input::MouseButton;
use kinora_engine::paint::Color;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::scene::EventCtx;
use crate::widget::Widget;

type ClickHandler = Box<dyn FnMut(&mut EventCtx<'_>)>;

/// A clickable text button.
///
/// Hover and press state are tracked from enter/leave and press/release
/// events. A click is a left press followed by a left release on the button.
///
/// # Example
/// ```rust,ignore
/// let search = Button::new("Search")
///     .background(Color::from_rgb_u8(40, 40, 60))
///     .hover_background(Color::from_rgb_u8(60, 60, 90))
///     .on_click(|ctx| ctx.post_parent(Message::custom(SEARCH)));
/// scene.add(toolbar, search, Rect::new(320, 8, 90, 32));
/// ```
pub struct Button {
    label: String,
    text_size: f32,
    text_color: Color,
    background: Color,
    hover_background: Color,
    press_background: Color,
    on_click: Option<ClickHandler>,

    hovered: bool,
    pressed: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text_size: 14.0,
            text_color: Color::WHITE,
            background: Color::from_rgb_u8(45, 45, 55),
            hover_background: Color::from_rgb_u8(65, 65, 80),
            press_background: Color::from_rgb_u8(30, 30, 38),
            on_click: None,
            hovered: false,
            pressed: false,
        }
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut(&mut EventCtx<'_>) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Background color when the cursor is over the button.
    pub fn hover_background(mut self, color: Color) -> Self {
        self.hover_background = color;
        self
    }

    /// Background color while the left button is held.
    pub fn press_background(mut self, color: Color) -> Self {
        self.press_background = color;
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Widget for Button {
    fn on_event(&mut self, event: &UiEvent<'_>, ctx: &mut EventCtx<'_>) -> EventResult {
        match event {
            UiEvent::MouseEnter { .. } => self.hovered = true,
            UiEvent::MouseLeft { .. } => {
                self.hovered = false;
                self.pressed = false;
            }
            UiEvent::MousePressed { button: MouseButton::Left, .. } => self.pressed = true,
            UiEvent::MouseReleased { button: MouseButton::Left, .. } => {
                if std::mem::take(&mut self.pressed) {
                    if let Some(f) = &mut self.on_click {
                        f(ctx);
                    }
                }
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn paint(&self, painter: &mut Painter<'_>) {
        let bg = if self.pressed {
            self.press_background
        } else if self.hovered {
            self.hover_background
        } else {
            self.background
        };
        painter.fill_rect(painter.bounds(), bg);

        let size = painter.size();
        let baseline = (size.height as f32 + self.text_size) * 0.5;
        painter.text(self.label.clone(), self.text_size, Point::new(8, baseline as i32), self.text_color);
    }
}
