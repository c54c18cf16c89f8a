//! GPU-compatible data types for the shape pipeline
//!
//! These types are designed to match the layouts in `shape.wgsl` exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A 2D vertex in window pixels with colour
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    /// Position in pixels, origin top-left, y down
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

/// Uniforms for the shape pass
/// Layout: 16 bytes (must match shape.wgsl ScreenUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Surface size in pixels
    pub screen_size: [f32; 2],
    /// Padding to align to 16 bytes
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen_size: [width.max(1) as f32, height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }

    /// Map a pixel position to clip space, as the vertex shader does
    pub fn pixel_to_clip(&self, position: [f32; 2]) -> [f32; 2] {
        [
            position[0] / self.screen_size[0] * 2.0 - 1.0,
            1.0 - position[1] / self.screen_size[1] * 2.0,
        ]
    }
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_shape_vertex_size() {
        // 2 floats position + 4 floats color = 24 bytes
        assert_eq!(size_of::<ShapeVertex>(), 24);
    }

    #[test]
    fn test_screen_uniforms_size() {
        assert_eq!(size_of::<ScreenUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<ShapeVertex>(), 4);
        assert_eq!(std::mem::align_of::<ScreenUniforms>(), 4);
    }

    #[test]
    fn test_pixel_to_clip_corners() {
        let u = ScreenUniforms::new(1000, 500);
        assert_eq!(u.pixel_to_clip([0.0, 0.0]), [-1.0, 1.0]);
        assert_eq!(u.pixel_to_clip([1000.0, 500.0]), [1.0, -1.0]);
        assert_eq!(u.pixel_to_clip([500.0, 250.0]), [0.0, 0.0]);
    }

    #[test]
    fn test_zero_size_clamped() {
        let u = ScreenUniforms::new(0, 0);
        assert_eq!(u.screen_size, [1.0, 1.0]);
    }
}
