//! Draws a [`Grid`] onto a [`Canvas`]
//!
//! Alive cells are filled tiles; dead cells are left as the cleared
//! background. Grid lines are drawn last, over the tiles.

use lifegrid_core::Grid;

use crate::canvas::{Canvas, Color, GRAY, WHITE};

/// Colours and line settings for the grid view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub alive_color: Color,
    pub line_color: Color,
    pub line_thickness: f32,
    pub show_lines: bool,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            alive_color: WHITE,
            line_color: GRAY,
            line_thickness: 2.0,
            show_lines: true,
        }
    }
}

/// Draw every alive cell, then the boundary lines
pub fn draw_grid<C: Canvas>(grid: &Grid, canvas: &mut C, style: &GridStyle) {
    let tile = grid.tile_size() as f32;

    for cell in grid.alive_cells() {
        let (x, y) = cell.origin();
        canvas.draw_rect(x as f32, y as f32, tile, tile, style.alive_color);
    }

    if style.show_lines {
        draw_lines(grid, canvas, style);
    }
}

/// One line per tile boundary, edges included
fn draw_lines<C: Canvas>(grid: &Grid, canvas: &mut C, style: &GridStyle) {
    let tile = grid.tile_size() as f32;
    let (width, height) = grid.pixel_size();
    let (width, height) = (width as f32, height as f32);

    for row in 0..=grid.rows() {
        let y = row as f32 * tile;
        canvas.draw_line([0.0, y], [width, y], style.line_color, style.line_thickness);
    }
    for col in 0..=grid.cols() {
        let x = col as f32 * tile;
        canvas.draw_line([x, 0.0], [x, height], style.line_color, style.line_thickness);
    }
}
