use std::collections::HashSet;

use crate::coords::Point;

use super::source::InputSource;
use super::types::{Key, Modifiers, MouseButton};

/// An [`InputSource`] whose state is set directly.
///
/// Used by tests and headless drivers: set the pointer/buttons/keys, run a
/// frame, repeat.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pub pointer: Point,
    pub buttons: HashSet<MouseButton>,
    pub keys: HashSet<Key>,
    pub modifiers: Modifiers,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: i32, y: i32) -> &mut Self {
        self.pointer = Point::new(x, y);
        self
    }

    pub fn press(&mut self, button: MouseButton) -> &mut Self {
        self.buttons.insert(button);
        self
    }

    pub fn release(&mut self, button: MouseButton) -> &mut Self {
        self.buttons.remove(&button);
        self
    }

    pub fn key_press(&mut self, key: Key) -> &mut Self {
        self.keys.insert(key);
        self
    }

    pub fn key_release(&mut self, key: Key) -> &mut Self {
        self.keys.remove(&key);
        self
    }

    pub fn with_modifiers(&mut self, modifiers: Modifiers) -> &mut Self {
        self.modifiers = modifiers;
        self
    }
}

impl InputSource for ScriptedInput {
    fn pointer(&self) -> Point {
        self.pointer
    }

    fn button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    fn key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
