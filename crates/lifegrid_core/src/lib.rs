//! Core types for Lifegrid
//!
//! This crate holds the Game of Life model and everything that mutates it,
//! with no dependency on windowing or rendering:
//!
//! - [`Cell`] - One tile with its current/staged state and neighbour indices
//! - [`Grid`] - Fixed-size arena of cells with lock-step rule evaluation
//! - [`TickGate`] - Decides which frames advance a generation
//! - [`SimulationController`] - Grid + gate + running state, driven by [`FrameInput`]
//! - [`Action`], [`Brush`], [`BrushStroke`] - Input vocabulary

mod action;
mod cell;
mod controller;
mod error;
mod grid;
pub mod rules;
mod tick_gate;

pub use action::{Action, Brush, BrushStroke, FrameInput};
pub use cell::{Cell, CellIndex, NEIGHBOR_OFFSETS, NEIGHBOR_SLOTS};
pub use controller::{ActionOutcome, FrameOutcome, SimulationController};
pub use error::GridError;
pub use grid::Grid;
pub use tick_gate::{TickGate, TickOutcome, MIN_TICK_THRESHOLD};
