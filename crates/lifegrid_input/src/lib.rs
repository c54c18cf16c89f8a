//! Input Handling
//!
//! This crate tracks raw winit input between frames so the application can
//! poll it once per frame: pending events, held keys, pointer position and
//! held pointer buttons.

mod input_state;

pub use input_state::{InputEvent, InputState, PointerButtons};
