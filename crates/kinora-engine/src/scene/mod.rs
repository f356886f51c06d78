//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store presenter-agnostic draw commands in canvas coordinates
//! - preserve paint order (insertion order = back-to-front)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::line::LineCmd;
pub use shapes::rect::RectCmd;
pub use shapes::text::TextCmd;
