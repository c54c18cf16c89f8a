//! Per-frame input state
//!
//! Window events arrive one at a time from winit; the simulation wants a
//! snapshot per frame. `InputState` sits in between:
//! - Press edges become queued [`InputEvent`]s, drained by [`InputState::poll_events`]
//! - Held keys and buttons are kept as current state
//! - The last cursor position is kept until the cursor leaves the window

use std::collections::HashSet;

use bitflags::bitflags;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

bitflags! {
    /// Pointer buttons currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PointerButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

impl PointerButtons {
    /// Flag for a winit mouse button, if tracked
    pub fn from_button(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(Self::LEFT),
            MouseButton::Right => Some(Self::RIGHT),
            MouseButton::Middle => Some(Self::MIDDLE),
            _ => None,
        }
    }
}

/// Discrete input events queued between polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window asked to close
    Quit,
    /// A key went from released to pressed
    KeyDown(KeyCode),
    /// A mouse button went from released to pressed
    MouseDown(MouseButton),
}

/// Input gathered from window events, read once per frame
#[derive(Debug, Default)]
pub struct InputState {
    pending: Vec<InputEvent>,
    held_keys: HashSet<KeyCode>,
    buttons: PointerButtons,
    pointer: Option<(f32, f32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process keyboard input
    ///
    /// OS key repeat is swallowed: only the released -> pressed edge queues
    /// a [`InputEvent::KeyDown`].
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.held_keys.insert(key) {
                    self.pending.push(InputEvent::KeyDown(key));
                }
            }
            ElementState::Released => {
                self.held_keys.remove(&key);
            }
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let Some(flag) = PointerButtons::from_button(button) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                if !self.buttons.contains(flag) {
                    self.pending.push(InputEvent::MouseDown(button));
                }
                self.buttons.insert(flag);
            }
            ElementState::Released => self.buttons.remove(flag),
        }
    }

    /// Process cursor movement in window pixels
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some((x as f32, y as f32));
    }

    /// The cursor left the window
    pub fn process_cursor_left(&mut self) {
        self.pointer = None;
    }

    /// The window lost focus; releases won't be delivered, so forget held state
    pub fn process_focus_lost(&mut self) {
        self.held_keys.clear();
        self.buttons = PointerButtons::empty();
    }

    /// Queue a quit request
    pub fn request_quit(&mut self) {
        self.pending.push(InputEvent::Quit);
    }

    /// Drain the events queued since the last poll, oldest first
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Last known pointer position, `None` outside the window
    #[inline]
    pub fn pointer_position(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// Buttons currently held
    #[inline]
    pub fn buttons(&self) -> PointerButtons {
        self.buttons
    }

    /// Keys currently held
    #[inline]
    pub fn held_keys(&self) -> &HashSet<KeyCode> {
        &self.held_keys
    }

    #[inline]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held_keys.contains(&key)
    }
}
