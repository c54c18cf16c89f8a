//! CPU-side shape batching
//!
//! [`ShapeBatch`] implements [`Canvas`] by tessellating every shape into
//! pixel-space triangles. The batch is rebuilt each frame and uploaded to the
//! [`ShapePipeline`](crate::pipeline::ShapePipeline) in one buffer write.

use crate::canvas::{Canvas, Color};
use crate::pipeline::ShapeVertex;

/// Vertices emitted per rectangle or line (two triangles)
pub const VERTICES_PER_QUAD: usize = 6;

/// Triangles collected for one frame
#[derive(Debug, Default, Clone)]
pub struct ShapeBatch {
    vertices: Vec<ShapeVertex>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a batch with room for `quads` rectangles or lines
    pub fn with_capacity(quads: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(quads * VERTICES_PER_QUAD),
        }
    }

    /// Remove all shapes, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Push the quad `a b c d` (in winding order) as two triangles
    fn push_quad(&mut self, a: [f32; 2], b: [f32; 2], c: [f32; 2], d: [f32; 2], color: Color) {
        for position in [a, b, c, a, c, d] {
            self.vertices.push(ShapeVertex { position, color });
        }
    }
}

impl Canvas for ShapeBatch {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.push_quad([x, y], [x + w, y], [x + w, y + h], [x, y + h], color);
    }

    fn draw_line(&mut self, from: [f32; 2], to: [f32; 2], color: Color, thickness: f32) {
        let (dx, dy) = (to[0] - from[0], to[1] - from[1]);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON || thickness <= 0.0 {
            return;
        }

        // Offset both ends along the unit normal by half the thickness
        let half = thickness / 2.0;
        let (nx, ny) = (-dy / len * half, dx / len * half);

        self.push_quad(
            [from[0] + nx, from[1] + ny],
            [to[0] + nx, to[1] + ny],
            [to[0] - nx, to[1] - ny],
            [from[0] - nx, from[1] - ny],
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::WHITE;

    #[test]
    fn test_rect_tessellation() {
        let mut batch = ShapeBatch::new();
        batch.draw_rect(10.0, 20.0, 5.0, 5.0, WHITE);
        assert_eq!(batch.vertex_count(), VERTICES_PER_QUAD);

        let xs: Vec<f32> = batch.vertices().iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = batch.vertices().iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 15.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 25.0);
    }

    #[test]
    fn test_degenerate_shapes_skipped() {
        let mut batch = ShapeBatch::new();
        batch.draw_rect(0.0, 0.0, 0.0, 10.0, WHITE);
        batch.draw_line([3.0, 3.0], [3.0, 3.0], WHITE, 2.0);
        batch.draw_line([0.0, 0.0], [10.0, 0.0], WHITE, 0.0);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_horizontal_line_thickness() {
        let mut batch = ShapeBatch::new();
        batch.draw_line([0.0, 40.0], [100.0, 40.0], WHITE, 2.0);
        assert_eq!(batch.vertex_count(), VERTICES_PER_QUAD);

        for v in batch.vertices() {
            assert!((v.position[1] - 40.0).abs() <= 1.0 + f32::EPSILON);
            assert!(v.position[0] == 0.0 || v.position[0] == 100.0);
        }
    }

    #[test]
    fn test_vertical_line_thickness() {
        let mut batch = ShapeBatch::new();
        batch.draw_line([20.0, 0.0], [20.0, 50.0], WHITE, 4.0);
        let min_x = batch.vertices().iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = batch.vertices().iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert!((min_x - 18.0).abs() < 1e-5);
        assert!((max_x - 22.0).abs() < 1e-5);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut batch = ShapeBatch::with_capacity(4);
        batch.draw_rect(0.0, 0.0, 1.0, 1.0, WHITE);
        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.vertices.capacity() >= 4 * VERTICES_PER_QUAD);
    }
}
