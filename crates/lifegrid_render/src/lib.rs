//! 2D Rendering Library
//!
//! This crate provides the wgpu-based renderer for the Game of Life grid.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`canvas::Canvas`] - Drawing contract: filled rectangles and thick lines
//! - [`batch::ShapeBatch`] - Canvas that tessellates shapes into triangles
//! - [`pipeline::ShapePipeline`] - Uploads and draws a batch
//! - [`grid_view::draw_grid`] - Draws a grid's alive tiles and boundary lines

pub mod batch;
pub mod canvas;
pub mod context;
pub mod grid_view;
pub mod pipeline;

pub use batch::ShapeBatch;
pub use canvas::{rgb8, Canvas, Color, BLACK, GRAY, WHITE};
pub use grid_view::{draw_grid, GridStyle};
