//! Simulation controller
//!
//! Owns the grid, the tick gate and the interaction state. One call to
//! [`SimulationController::frame`] covers everything between polling input
//! and rendering:
//! 1. Apply actions in order (stopping at Quit)
//! 2. Apply the brush stroke under the pointer
//! 3. If running and the gate fires, evaluate then commit a generation
//!
//! Rendering reads the grid after `frame` returns, so it never observes a
//! half-updated generation.

use crate::action::{Action, BrushStroke, FrameInput};
use crate::grid::Grid;
use crate::tick_gate::{TickGate, TickOutcome};

/// Result of applying a single action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    Quit,
}

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    /// A generation was advanced this frame
    pub advanced: bool,
    /// The brush changed a cell this frame
    pub painted: bool,
    /// Quit was requested; the caller should stop the loop
    pub quit: bool,
}

/// Drives the Game of Life from input
#[derive(Debug, Clone)]
pub struct SimulationController {
    grid: Grid,
    gate: TickGate,
    running: bool,
    generation: u64,
}

impl SimulationController {
    /// Create a paused controller around `grid`
    pub fn new(grid: Grid, tick_threshold: u32) -> Self {
        Self {
            grid,
            gate: TickGate::new(tick_threshold),
            running: false,
            generation: 0,
        }
    }

    /// Set the initial running state
    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            self.running = running;
            log::info!("Simulation {}", if running { "started" } else { "paused" });
        }
    }

    #[inline]
    pub fn tick_threshold(&self) -> u32 {
        self.gate.threshold()
    }

    /// Frames accumulated toward the next generation
    #[inline]
    pub fn tick_counter(&self) -> u32 {
        self.gate.counter()
    }

    /// Generations advanced since start or the last reset
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one action
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::ToggleRunning => {
                let running = !self.running;
                self.set_running(running);
            }
            Action::IncreaseTickThreshold => {
                if self.gate.increase() {
                    log::info!("New tick threshold is {}", self.gate.threshold());
                }
            }
            Action::DecreaseTickThreshold => {
                if self.gate.decrease() {
                    log::info!("New tick threshold is {}", self.gate.threshold());
                }
            }
            Action::Reset => self.reset(),
            Action::Invert => {
                self.grid.invert_all();
                log::debug!("Inverted grid, {} cells alive", self.grid.alive_count());
            }
            Action::Quit => return ActionOutcome::Quit,
        }
        ActionOutcome::Continue
    }

    /// Kill every cell and pause
    pub fn reset(&mut self) {
        self.grid.set_all_alive(false);
        self.set_running(false);
        self.gate.reset_counter();
        if self.generation != 0 {
            log::info!("Grid reset after {} generations", self.generation);
        }
        self.generation = 0;
    }

    /// Apply a brush at its pixel position, returning whether a cell was hit
    pub fn paint(&mut self, stroke: BrushStroke) -> bool {
        self.grid.set_alive_at(stroke.x, stroke.y, stroke.brush.alive())
    }

    /// Count one frame and advance a generation if the gate fires
    ///
    /// Paused frames leave the gate untouched.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }
        match self.gate.tick() {
            TickOutcome::Hold => false,
            TickOutcome::Fire => {
                self.grid.step();
                self.generation += 1;
                log::debug!(
                    "Generation {}: {} cells alive",
                    self.generation,
                    self.grid.alive_count()
                );
                true
            }
        }
    }

    /// Run one frame of input and simulation
    pub fn frame(&mut self, input: &FrameInput) -> FrameOutcome {
        for &action in &input.actions {
            if self.apply(action) == ActionOutcome::Quit {
                return FrameOutcome {
                    advanced: false,
                    painted: false,
                    quit: true,
                };
            }
        }

        let painted = input.stroke.map(|s| self.paint(s)).unwrap_or(false);
        let advanced = self.advance();

        FrameOutcome {
            advanced,
            painted,
            quit: false,
        }
    }
}
