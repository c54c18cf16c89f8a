//! Application systems
//!
//! Window, rendering, simulation and frame pacing, each owned by the app and
//! driven from the event loop.

mod frame_pacer;
mod render;
mod simulation;
mod window;

pub use frame_pacer::FramePacer;
pub use render::{clear_color, grid_style, RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
