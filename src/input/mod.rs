//! Input handling module
//!
//! Provides input mapping from polled input state to simulation actions.

mod input_mapper;

pub use input_mapper::InputMapper;
