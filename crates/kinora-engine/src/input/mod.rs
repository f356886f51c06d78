//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code translates platform events into `InputEvent`s and applies them
//! to an `InputState`; consumers poll through [`InputSource`].

mod scripted;
mod source;
mod state;
mod types;

pub use scripted::ScriptedInput;
pub use source::{CanvasInput, InputSource};
pub use state::InputState;
pub use types::{InputEvent, Key, Modifiers, MouseButton, MouseButtons};
