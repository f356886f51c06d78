use crate::widget::Widget;

/// A widget with no behaviour of its own.
///
/// Used for the scene root and for grouping children; its background and
/// outline come from the scene (`set_background`, `set_outline`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Panel;

impl Widget for Panel {}
