//! Input vocabulary understood by the simulation controller
//!
//! These types are independent of any windowing library; the input crate maps
//! raw events onto them once per frame.

/// Discrete actions triggered by the keyboard or the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start or pause generation updates (Space)
    ToggleRunning,
    /// One more frame per generation (Up)
    IncreaseTickThreshold,
    /// One less frame per generation, floor 1 (Down)
    DecreaseTickThreshold,
    /// Kill every cell and pause (R)
    Reset,
    /// Flip every cell (I)
    Invert,
    /// Leave the application
    Quit,
}

/// What a held mouse button does to the tile under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    /// Set the tile alive (left button)
    Paint,
    /// Set the tile dead (right button)
    Erase,
}

impl Brush {
    /// The state the brush writes
    #[inline]
    pub fn alive(self) -> bool {
        matches!(self, Brush::Paint)
    }
}

/// A brush applied at a pixel position for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushStroke {
    pub brush: Brush,
    pub x: f32,
    pub y: f32,
}

impl BrushStroke {
    pub fn new(brush: Brush, x: f32, y: f32) -> Self {
        Self { brush, x, y }
    }
}

/// Everything the controller needs from input for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Actions in the order they were produced
    pub actions: Vec<Action>,
    /// Brush under the pointer, if a button is held over the window
    pub stroke: Option<BrushStroke>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_stroke(mut self, stroke: BrushStroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Whether the frame carries no input at all
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.stroke.is_none()
    }
}
