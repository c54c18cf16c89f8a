//! Grid error types
//!
//! Grid construction is the only fallible operation in the core; everything
//! else is a total function with a defined no-op branch.

use std::fmt;

/// Error type for grid construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or columns
    InvalidDimensions { rows: usize, cols: usize },
    /// Zero tile size
    InvalidTileSize,
    /// The window cannot hold a single tile
    WindowTooSmall { width: u32, height: u32, tile_size: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid grid dimensions: {}x{} (both must be positive)", rows, cols)
            }
            GridError::InvalidTileSize => write!(f, "Invalid tile size: must be positive"),
            GridError::WindowTooSmall { width, height, tile_size } => write!(
                f,
                "Window {}x{} is too small for {}px tiles",
                width, height, tile_size
            ),
        }
    }
}

impl std::error::Error for GridError {}
