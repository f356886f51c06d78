//! Kinora UI — retained widget tree and message dispatch on top of
//! `kinora-engine`.
//!
//! Widgets live in an arena owned by a [`UiScene`](scene::UiScene), each with
//! explicit bounds relative to its parent and a FIFO inbox. Once per frame the
//! scene polls input, posts the resulting messages to the root and drains
//! every inbox; pointer messages are forwarded to the widget under the
//! pointer, keys to the focus widget, timer ticks to their owner.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kinora_ui::prelude::*;
//!
//! let mut scene = UiScene::new(UiConfig::default());
//! let root = scene.root();
//! let play = scene.add(root, Button::new("Play").on_click(|_| log::info!("play")), Rect::new(20, 20, 80, 32));
//!
//! // In your frame callback:
//! scene.update(dt_ms, &input);
//! draw_list.clear();
//! scene.draw(&mut draw_list);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type and add it with
//! [`UiScene::add`](scene::UiScene::add).

pub mod app;
mod dispatch;
pub mod event;
pub mod generator;
pub mod message;
pub mod messenger;
pub mod painter;
pub mod scene;
pub mod timer;
mod tree;
pub mod widget;
pub mod widgets;


// Top-level re-exports for the common entry point — `use kinora_ui::Application`
pub use app::Application;
pub use tree::WidgetId;

/// Everything you need to build and extend UI — import this in your component files.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::message::{CustomMessage, KeyInfo, Message, MessageCode};
    pub use crate::painter::Painter;
    pub use crate::scene::{EventCtx, UiConfig, UiScene};
    pub use crate::timer::TimerId;
    pub use crate::tree::WidgetId;
    pub use crate::widget::Widget;
    pub use crate::widgets::{Button, Label, Panel, Slider, TextEdit};

    // Re-export the engine primitives everyone needs.
    pub use kinora_engine::coords::{Point, Rect, Size};
    pub use kinora_engine::input::{InputSource, Key, MouseButton, MouseButtons};
    pub use kinora_engine::paint::{Brush, Color};
}
