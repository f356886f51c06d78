use std::any::Any;

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::scene::EventCtx;

// ── Widget trait ──────────────────────────────────────────────────────────

/// Behaviour attached to a node of the widget tree.
///
/// Geometry, children, opacity and the inbox belong to the scene; a widget
/// only reacts to delivered events and paints its own content.
///
/// # Implementing a custom widget
///
/// ```rust,ignore
/// use kinora_ui::prelude::*;
///
/// pub struct Poster { hovered: bool }
///
/// impl Widget for Poster {
///     fn on_event(&mut self, event: &UiEvent<'_>, _ctx: &mut EventCtx<'_>) -> EventResult {
///         match event {
///             UiEvent::MouseEnter { .. } => self.hovered = true,
///             UiEvent::MouseLeft { .. } => self.hovered = false,
///             _ => return EventResult::Ignored,
///         }
///         EventResult::Consumed
///     }
///
///     fn paint(&self, painter: &mut Painter<'_>) {
///         if self.hovered {
///             painter.fill_rect(painter.bounds(), Color::from_rgb_u8(40, 40, 60));
///         }
///     }
/// }
///
/// let poster = scene.add(scene.root(), Poster { hovered: false }, Rect::new(10, 10, 120, 180));
/// ```
pub trait Widget: AsAny {
    /// Handles one delivered event.
    ///
    /// The default implementation does nothing and returns `Ignored`, so
    /// widgets only override this if they handle events.
    fn on_event(&mut self, _event: &UiEvent<'_>, _ctx: &mut EventCtx<'_>) -> EventResult {
        EventResult::Ignored
    }

    /// Paints the widget's own content in local coordinates. The background
    /// rectangle has already been painted; children are painted afterwards.
    fn paint(&self, _painter: &mut Painter<'_>) {}

    /// Called when the widget is detached from its parent, before focus and
    /// cursor are redirected. Release whatever the widget created itself
    /// (e.g. destroy helper widgets it added elsewhere in the tree).
    fn cleanup(&mut self, _ctx: &mut EventCtx<'_>) {}
}

/// Downcasting support for stored widgets.
pub trait AsAny: 'static {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
