//! Drawing contract
//!
//! Everything the application draws goes through [`Canvas`]: filled
//! rectangles and thick lines, both in window pixels with the origin at the
//! top-left corner.

/// RGBA colour, each channel in `0.0..=1.0`
pub type Color = [f32; 4];

/// Opaque colour from 8-bit channels
pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
/// `rgb8(60, 60, 60)`
pub const GRAY: Color = [0.235_294_12, 0.235_294_12, 0.235_294_12, 1.0];

/// A surface that accepts 2D shapes in pixel coordinates
pub trait Canvas {
    /// Fill the axis-aligned rectangle with top-left `(x, y)` and size `(w, h)`
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Draw a line from `from` to `to`, `thickness` pixels wide
    fn draw_line(&mut self, from: [f32; 2], to: [f32; 2], color: Color, thickness: f32);
}
