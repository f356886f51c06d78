//! Per-frame input polling.
//!
//! The generator keeps its own copy of last frame's pointer, buttons and keys
//! and turns level queries against an [`InputSource`] into edge messages, so
//! each transition is reported exactly once no matter who else polls the
//! platform.

use std::collections::HashSet;

use kinora_engine::coords::Point;
use kinora_engine::input::{InputSource, Key, MouseButton, MouseButtons};

use crate::message::{KeyInfo, Message};
use crate::timer::TimerRegistry;

/// Buttons polled for press/release edges, in emission order.
const TRACKED_BUTTONS: [MouseButton; 2] = [MouseButton::Left, MouseButton::Right];

#[derive(Debug, Default)]
pub struct MessageGenerator {
    prev_pointer: Point,
    prev_buttons: MouseButtons,
    prev_keys: HashSet<Key>,
}

impl MessageGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polls `input`, ticks `timers` by `dt_ms` and returns this frame's batch.
    ///
    /// Order: button edges (left, then right), at most one pointer move, key
    /// edges in `tracked_keys` order, then fired timers in registration order.
    pub fn generate(
        &mut self,
        input: &dyn InputSource,
        tracked_keys: &[Key],
        timers: &mut TimerRegistry,
        dt_ms: f32,
    ) -> Vec<Message> {
        let mut batch = Vec::new();
        let pointer = input.pointer();
        let buttons = input.mouse_buttons();

        for button in TRACKED_BUTTONS {
            let (was, is) = (held(self.prev_buttons, button), held(buttons, button));
            if is && !was {
                batch.push(Message::MousePressed { button, pos: pointer });
            } else if was && !is {
                batch.push(Message::MouseReleased { button, pos: pointer });
            }
        }
        self.prev_buttons = buttons;

        if pointer != self.prev_pointer {
            batch.push(Message::MouseMove { pos: pointer, buttons });
            self.prev_pointer = pointer;
        }

        let modifiers = input.modifiers();
        for &key in tracked_keys {
            let is = input.key_down(key);
            let was = self.prev_keys.contains(&key);
            if is && !was {
                self.prev_keys.insert(key);
                batch.push(Message::KeyPressed(KeyInfo::new(key, modifiers)));
            } else if was && !is {
                self.prev_keys.remove(&key);
                batch.push(Message::KeyReleased(KeyInfo::new(key, modifiers)));
            }
        }

        for (owner, id) in timers.tick(dt_ms) {
            batch.push(Message::Timer { owner, id });
        }

        batch
    }
}

fn held(buttons: MouseButtons, button: MouseButton) -> bool {
    match button {
        MouseButton::Left => buttons.left,
        MouseButton::Right => buttons.right,
        MouseButton::Middle => buttons.middle,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageCode;
    use crate::tree::WidgetId;
    use kinora_engine::input::ScriptedInput;
    use slotmap::SlotMap;

    fn codes(batch: &[Message]) -> Vec<MessageCode> {
        batch.iter().map(Message::code).collect()
    }

    #[test]
    fn idle_frame_is_empty() {
        let mut generator = MessageGenerator::new();
        let input = ScriptedInput::new();
        let batch = generator.generate(&input, Key::TRACKED, &mut TimerRegistry::new(), 16.0);
        assert!(batch.is_empty());
    }

    #[test]
    fn transitions_fire_once() {
        let mut generator = MessageGenerator::new();
        let mut timers = TimerRegistry::new();
        let mut input = ScriptedInput::new();
        input.move_to(5, 5).press(MouseButton::Left);

        let batch = generator.generate(&input, Key::TRACKED, &mut timers, 16.0);
        assert_eq!(codes(&batch), vec![MessageCode::MousePressed, MessageCode::DraggingMouse]);

        let batch = generator.generate(&input, Key::TRACKED, &mut timers, 16.0);
        assert!(batch.is_empty());

        input.release(MouseButton::Left);
        let batch = generator.generate(&input, Key::TRACKED, &mut timers, 16.0);
        assert!(matches!(
            batch.as_slice(),
            [Message::MouseReleased { button: MouseButton::Left, pos }] if *pos == Point::new(5, 5)
        ));
    }

    #[test]
    fn batch_order_is_buttons_move_keys_timers() {
        let mut map: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let owner = map.insert(());
        let mut timers = TimerRegistry::new();
        timers.add(owner, 9, 10.0);

        let mut generator = MessageGenerator::new();
        let mut input = ScriptedInput::new();
        input
            .move_to(3, 4)
            .press(MouseButton::Right)
            .press(MouseButton::Left)
            .key_press(Key::B)
            .key_press(Key::A);

        let batch = generator.generate(&input, Key::TRACKED, &mut timers, 10.0);
        assert!(matches!(batch[0], Message::MousePressed { button: MouseButton::Left, .. }));
        assert!(matches!(batch[1], Message::MousePressed { button: MouseButton::Right, .. }));
        assert_eq!(batch[2].code(), MessageCode::DraggingMouse);
        assert!(matches!(batch[3], Message::KeyPressed(KeyInfo { key: Key::A, .. })));
        assert!(matches!(batch[4], Message::KeyPressed(KeyInfo { key: Key::B, .. })));
        assert!(matches!(batch[5], Message::Timer { id: 9, .. }));
        assert_eq!(batch.len(), 6);
    }

    #[test]
    fn untracked_keys_are_ignored() {
        let mut generator = MessageGenerator::new();
        let mut input = ScriptedInput::new();
        input.key_press(Key::F5).key_press(Key::Q);

        let batch = generator.generate(&input, &[Key::Q], &mut TimerRegistry::new(), 16.0);
        assert_eq!(codes(&batch), vec![MessageCode::KeyPressed]);

        input.key_release(Key::Q);
        let batch = generator.generate(&input, &[Key::Q], &mut TimerRegistry::new(), 16.0);
        assert!(matches!(batch.as_slice(), [Message::KeyReleased(KeyInfo { key: Key::Q, ch: Some('Q'), .. })]));
    }
}
