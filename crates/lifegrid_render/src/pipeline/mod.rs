//! Rendering pipeline components
//!
//! A single render pipeline draws flat-coloured triangles in pixel space.

pub mod shape_pipeline;
pub mod types;

pub use shape_pipeline::ShapePipeline;
pub use types::{ScreenUniforms, ShapeVertex};
