//! Input mapping from raw input state to simulation input
//!
//! Discrete bindings (space, i, Escape) fire once per key-down event.
//! Held bindings (arrows, r) and the brush fire on every frame the key or
//! button stays down.

use lifegrid_core::{Action, Brush, BrushStroke, FrameInput};
use lifegrid_input::{InputEvent, InputState, PointerButtons};
use winit::keyboard::KeyCode;

/// Keys acted on every frame while held, in application order
const HELD_BINDINGS: [(KeyCode, Action); 3] = [
    (KeyCode::ArrowUp, Action::IncreaseTickThreshold),
    (KeyCode::ArrowDown, Action::DecreaseTickThreshold),
    (KeyCode::KeyR, Action::Reset),
];

/// Maps polled input to semantic actions and brush strokes
pub struct InputMapper;

impl InputMapper {
    /// Map a discrete input event to an action
    ///
    /// Returns `None` for keys without a key-down binding and for mouse clicks,
    /// which are handled as held buttons instead.
    pub fn map_event(event: InputEvent) -> Option<Action> {
        match event {
            InputEvent::Quit => Some(Action::Quit),
            InputEvent::KeyDown(key) => match key {
                KeyCode::Space => Some(Action::ToggleRunning),
                KeyCode::KeyI => Some(Action::Invert),
                KeyCode::Escape => Some(Action::Quit),
                _ => None,
            },
            InputEvent::MouseDown(_) => None,
        }
    }

    /// Actions for the keys currently held
    pub fn map_held_keys(state: &InputState) -> Vec<Action> {
        HELD_BINDINGS
            .iter()
            .filter(|(key, _)| state.is_held(*key))
            .map(|(_, action)| *action)
            .collect()
    }

    /// Brush for the held buttons at the given pointer position
    ///
    /// Left wins when both buttons are down.
    pub fn map_pointer(
        position: Option<(f32, f32)>,
        buttons: PointerButtons,
    ) -> Option<BrushStroke> {
        let (x, y) = position?;
        let brush = if buttons.contains(PointerButtons::LEFT) {
            Brush::Paint
        } else if buttons.contains(PointerButtons::RIGHT) {
            Brush::Erase
        } else {
            return None;
        };
        Some(BrushStroke::new(brush, x, y))
    }

    /// Drain pending events and sample held state into one frame of input
    pub fn frame_input(state: &mut InputState) -> FrameInput {
        let mut input = FrameInput::new();

        for event in state.poll_events() {
            if let Some(action) = Self::map_event(event) {
                input.actions.push(action);
            }
        }
        input.actions.extend(Self::map_held_keys(state));
        input.stroke = Self::map_pointer(state.pointer_position(), state.buttons());

        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::{ElementState, MouseButton};

    #[test]
    fn test_discrete_bindings() {
        assert_eq!(
            InputMapper::map_event(InputEvent::KeyDown(KeyCode::Space)),
            Some(Action::ToggleRunning)
        );
        assert_eq!(
            InputMapper::map_event(InputEvent::KeyDown(KeyCode::KeyI)),
            Some(Action::Invert)
        );
        assert_eq!(
            InputMapper::map_event(InputEvent::KeyDown(KeyCode::Escape)),
            Some(Action::Quit)
        );
        assert_eq!(InputMapper::map_event(InputEvent::Quit), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::Enter] {
            let action = InputMapper::map_event(InputEvent::KeyDown(key));
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_held_keys_have_no_key_down_binding() {
        // Arrows and r act through held state only
        for key in [KeyCode::ArrowUp, KeyCode::ArrowDown, KeyCode::KeyR] {
            assert_eq!(InputMapper::map_event(InputEvent::KeyDown(key)), None);
        }
    }

    #[test]
    fn test_click_not_mapped() {
        let action = InputMapper::map_event(InputEvent::MouseDown(MouseButton::Left));
        assert_eq!(action, None);
    }

    #[test]
    fn test_held_keys_mapped_every_frame() {
        let mut state = InputState::new();
        state.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);

        let first = InputMapper::frame_input(&mut state);
        let second = InputMapper::frame_input(&mut state);
        assert_eq!(first.actions, vec![Action::IncreaseTickThreshold]);
        assert_eq!(second.actions, vec![Action::IncreaseTickThreshold]);

        state.process_keyboard(KeyCode::ArrowUp, ElementState::Released);
        assert!(InputMapper::frame_input(&mut state).is_empty());
    }

    #[test]
    fn test_held_keys_order() {
        let mut state = InputState::new();
        state.process_keyboard(KeyCode::KeyR, ElementState::Pressed);
        state.process_keyboard(KeyCode::ArrowDown, ElementState::Pressed);
        state.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);

        assert_eq!(
            InputMapper::map_held_keys(&state),
            vec![
                Action::IncreaseTickThreshold,
                Action::DecreaseTickThreshold,
                Action::Reset,
            ]
        );
    }

    #[test]
    fn test_space_fires_once_per_press() {
        let mut state = InputState::new();
        state.process_keyboard(KeyCode::Space, ElementState::Pressed);

        let first = InputMapper::frame_input(&mut state);
        assert_eq!(first.actions, vec![Action::ToggleRunning]);

        // Still held, no new key-down
        let second = InputMapper::frame_input(&mut state);
        assert!(second.actions.is_empty());
    }

    #[test]
    fn test_brush_from_buttons() {
        let pos = Some((30.0, 45.0));
        assert_eq!(
            InputMapper::map_pointer(pos, PointerButtons::LEFT),
            Some(BrushStroke::new(Brush::Paint, 30.0, 45.0))
        );
        assert_eq!(
            InputMapper::map_pointer(pos, PointerButtons::RIGHT),
            Some(BrushStroke::new(Brush::Erase, 30.0, 45.0))
        );
        assert_eq!(InputMapper::map_pointer(pos, PointerButtons::MIDDLE), None);
        assert_eq!(InputMapper::map_pointer(pos, PointerButtons::empty()), None);
    }

    #[test]
    fn test_left_wins_over_right() {
        let stroke = InputMapper::map_pointer(
            Some((1.0, 1.0)),
            PointerButtons::LEFT | PointerButtons::RIGHT,
        );
        assert_eq!(stroke.map(|s| s.brush), Some(Brush::Paint));
    }

    #[test]
    fn test_no_brush_without_pointer() {
        assert_eq!(InputMapper::map_pointer(None, PointerButtons::LEFT), None);
    }

    #[test]
    fn test_frame_input_collects_stroke() {
        let mut state = InputState::new();
        state.process_cursor_moved(25.0, 65.0);
        state.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        let input = InputMapper::frame_input(&mut state);
        assert!(input.actions.is_empty());
        assert_eq!(input.stroke, Some(BrushStroke::new(Brush::Paint, 25.0, 65.0)));
    }
}
