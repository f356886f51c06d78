use kinora_engine::coords::{Point, Rect, Size};
use kinora_engine::input::MouseButton;
use kinora_engine::paint::Color;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::scene::EventCtx;
use crate::widget::Widget;

type ChangeHandler = Box<dyn FnMut(f32, &mut EventCtx<'_>)>;

/// A horizontal slider for selecting a value in a range.
///
/// Pressing on the track jumps to that position; dragging keeps updating the
/// value even when the pointer leaves the slider, until the button is
/// released.
///
/// # Example
/// ```rust,ignore
/// Slider::new()
///     .min(1950.0).max(2025.0).value(1990.0)
///     .on_change(|year, ctx| ctx.post_parent(Message::custom_with(YEAR, year)))
/// ```
pub struct Slider {
    /// Current value (clamped to [min, max]).
    value: f32,
    min: f32,
    max: f32,
    thumb_width: u32,
    track_color: Color,
    fill_color: Color,
    thumb_color: Color,
    on_change: Option<ChangeHandler>,

    dragging: bool,
}

impl Slider {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 1.0,
            thumb_width: 8,
            track_color: Color::from_rgb_u8(38, 51, 77),
            fill_color: Color::from_rgb_u8(51, 153, 255),
            thumb_color: Color::WHITE,
            on_change: None,
            dragging: false,
        }
    }

    pub fn value(mut self, v: f32) -> Self {
        self.value = v.clamp(self.min, self.max);
        self
    }
    pub fn min(mut self, v: f32) -> Self { self.min = v; self }
    pub fn max(mut self, v: f32) -> Self { self.max = v; self }
    pub fn thumb_width(mut self, v: u32) -> Self { self.thumb_width = v; self }
    pub fn track_color(mut self, v: Color) -> Self { self.track_color = v; self }
    pub fn fill_color(mut self, v: Color) -> Self { self.fill_color = v; self }
    pub fn thumb_color(mut self, v: Color) -> Self { self.thumb_color = v; self }

    /// Called whenever the value changes through the pointer.
    pub fn on_change(mut self, f: impl FnMut(f32, &mut EventCtx<'_>) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn current(&self) -> f32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Normalized value in [0, 1].
    fn normalized(&self) -> f32 {
        if (self.max - self.min).abs() < f32::EPSILON {
            0.0
        } else {
            ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
        }
    }

    fn set_from_x(&mut self, x: i32, width: u32, ctx: &mut EventCtx<'_>) {
        let t = if width == 0 { 0.0 } else { (x as f32 / width as f32).clamp(0.0, 1.0) };
        let value = self.min + t * (self.max - self.min);
        if value != self.value {
            self.value = value;
            if let Some(f) = &mut self.on_change {
                f(value, ctx);
            }
        }
    }
}

impl Default for Slider { fn default() -> Self { Self::new() } }

impl Widget for Slider {
    fn on_event(&mut self, event: &UiEvent<'_>, ctx: &mut EventCtx<'_>) -> EventResult {
        let width = ctx.own_size().width;
        match event {
            UiEvent::MousePressed { button: MouseButton::Left, pos } => {
                self.dragging = true;
                self.set_from_x(pos.x, width, ctx);
            }
            UiEvent::Drag { pos, buttons } if self.dragging && buttons.left => {
                self.set_from_x(pos.x, width, ctx);
            }
            UiEvent::MouseReleased { button: MouseButton::Left, .. } => self.dragging = false,
            // The release may land on another widget; the next plain move ends the drag.
            UiEvent::MouseMove { .. } | UiEvent::MouseEnter { .. } if self.dragging => {
                self.dragging = false;
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn paint(&self, painter: &mut Painter<'_>) {
        let size = painter.size();
        let track_h = (size.height / 4).max(2);
        let track_y = (size.height.saturating_sub(track_h) / 2) as i32;
        painter.fill_rect(Rect::new(0, track_y, size.width, track_h), self.track_color);

        let fill_w = (self.normalized() * size.width as f32).round() as u32;
        if fill_w > 0 {
            painter.fill_rect(Rect::new(0, track_y, fill_w, track_h), self.fill_color);
        }

        let thumb_x = fill_w as i32 - (self.thumb_width / 2) as i32;
        let thumb = Rect::from_origin_size(Point::new(thumb_x, 0), Size::new(self.thumb_width, size.height));
        painter.fill_rect(thumb, self.thumb_color);
    }
}
