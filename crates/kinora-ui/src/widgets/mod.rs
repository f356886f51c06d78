//! Stock widgets built on the public [`Widget`](crate::widget::Widget) API.

pub mod button;
pub mod label;
pub mod panel;
pub mod slider;
pub mod text_edit;

pub use button::Button;
pub use label::Label;
pub use panel::Panel;
pub use slider::Slider;
pub use text_edit::{TextEdit, TextEditState};
