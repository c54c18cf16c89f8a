//! Lifegrid - Conway's Game of Life on a tile grid
//!
//! The binary wires these modules to a winit event loop; they are exposed as a
//! library so integration tests can load configuration and drive systems.

pub mod config;
pub mod input;
pub mod systems;
