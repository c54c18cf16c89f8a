//! Simulation system
//!
//! Owns the [`SimulationController`] and runs it once per frame:
//! - Polled input -> actions and brush
//! - Tick gate -> generation step
//! - Frame statistics for the window title

use std::time::Instant;

use lifegrid_core::{FrameInput, FrameOutcome, SimulationController};

use crate::config::{AppConfig, ConfigError};

/// Manages the Game of Life simulation between frames
pub struct SimulationSystem {
    controller: SimulationController,
    frames: u64,
    started: Instant,
}

impl SimulationSystem {
    /// Create a simulation system with the given controller
    pub fn new(controller: SimulationController) -> Self {
        Self {
            controller,
            frames: 0,
            started: Instant::now(),
        }
    }

    /// Build the grid and controller described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let grid = config.build_grid()?;
        log::info!(
            "Grid is {} rows x {} cols ({}px tiles)",
            grid.rows(),
            grid.cols(),
            grid.tile_size()
        );

        let controller = SimulationController::new(grid, config.simulation.initial_tick_threshold)
            .with_running(config.simulation.start_running);

        Ok(Self::new(controller))
    }

    /// Run one simulation frame
    ///
    /// Applies the frame's input, then advances the grid if the tick gate fires.
    /// The grid is fully settled when this returns.
    pub fn update(&mut self, input: &FrameInput) -> FrameOutcome {
        self.frames += 1;
        let outcome = self.controller.frame(input);
        if outcome.quit {
            log::info!(
                "Quit after {} frames ({:.0} fps average)",
                self.frames,
                self.average_fps()
            );
        }
        outcome
    }

    /// The simulation state
    pub fn controller(&self) -> &SimulationController {
        &self.controller
    }

    /// Mutable simulation state
    pub fn controller_mut(&mut self) -> &mut SimulationController {
        &mut self.controller
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Average frames per second since creation
    pub fn average_fps(&self) -> f64 {
        let elapsed = self.started.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.frames as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Window title text for the current state
    pub fn status_title(&self, base_title: &str) -> String {
        let controller = &self.controller;
        format!(
            "{} - gen {} | {} alive | {} frames/gen [{}]",
            base_title,
            controller.generation(),
            controller.grid().alive_count(),
            controller.tick_threshold(),
            if controller.is_running() { "running" } else { "paused" }
        )
    }
}
