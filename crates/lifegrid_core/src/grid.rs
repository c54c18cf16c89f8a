//! Grid container for cells
//!
//! The Grid owns every [`Cell`] in a flat row-major arena. Neighbour links are
//! arena indices resolved once, after the arena is fully built, so cells never
//! hold references to each other.

use crate::cell::{Cell, CellIndex, NEIGHBOR_OFFSETS};
use crate::error::GridError;
use crate::rules;

/// The Game of Life grid
///
/// Dimensions are fixed at construction; no cell is ever added or removed.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tile_size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of `rows x cols` dead cells with square tiles of `tile_size` pixels
    pub fn new(rows: usize, cols: usize, tile_size: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        if tile_size == 0 {
            return Err(GridError::InvalidTileSize);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row, col, tile_size));
            }
        }

        let mut grid = Self {
            rows,
            cols,
            tile_size,
            cells,
        };
        // Must run after the arena is complete
        grid.compute_neighbors();
        Ok(grid)
    }

    /// Create the grid that fits a `width x height` pixel window
    ///
    /// Partial tiles at the right and bottom edges are dropped.
    pub fn from_window(width: u32, height: u32, tile_size: u32) -> Result<Self, GridError> {
        if tile_size == 0 {
            return Err(GridError::InvalidTileSize);
        }
        let rows = (height / tile_size) as usize;
        let cols = (width / tile_size) as usize;
        if rows == 0 || cols == 0 {
            return Err(GridError::WindowTooSmall {
                width,
                height,
                tile_size,
            });
        }
        Self::new(rows, cols, tile_size)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Size of the tiled area in pixels `(width, height)`
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.cols as u32 * self.tile_size,
            self.rows as u32 * self.tile_size,
        )
    }

    /// Number of cells in the grid
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A grid is never empty; provided for API completeness
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Arena index for `(row, col)`, if it lies inside the grid
    pub fn index_of(&self, row: usize, col: usize) -> Option<CellIndex> {
        (row < self.rows && col < self.cols).then(|| CellIndex::new(row * self.cols + col))
    }

    /// Get a cell by arena index
    pub fn get(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index.index())
    }

    /// Get the cell at `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index_of(row, col).and_then(|i| self.get(i))
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterate over alive cells in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.alive)
    }

    /// Whether the cell at `(row, col)` is alive; `false` outside the grid
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).map(|c| c.alive).unwrap_or(false)
    }

    /// Set the cell at `(row, col)`, returning whether it exists
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.index_of(row, col) {
            Some(index) => {
                self.cells[index.index()].alive = alive;
                true
            }
            None => false,
        }
    }

    /// Number of alive cells
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Number of neighbours that exist for the cell at `(row, col)`
    pub fn neighbor_count(&self, row: usize, col: usize) -> Option<usize> {
        self.cell(row, col).map(Cell::neighbor_count)
    }

    /// Resolve every cell's neighbour slots
    ///
    /// A slot is filled only when the offset stays inside the grid; edges are
    /// hard boundaries. Re-running on the same grid gives the same result.
    pub fn compute_neighbors(&mut self) {
        let (rows, cols) = (self.rows as isize, self.cols as isize);

        for index in 0..self.cells.len() {
            let row = self.cells[index].row() as isize;
            let col = self.cells[index].col() as isize;

            for (slot, (dr, dc)) in NEIGHBOR_OFFSETS.iter().enumerate() {
                let (r, c) = (row + dr, col + dc);
                self.cells[index].neighbors[slot] = if r >= 0 && r < rows && c >= 0 && c < cols {
                    Some(CellIndex::new((r * cols + c) as usize))
                } else {
                    None
                };
            }
        }
    }

    /// Count alive neighbours of the cell at `index`
    fn alive_neighbors(&self, index: usize) -> usize {
        self.cells[index]
            .neighbors
            .iter()
            .flatten()
            .filter(|n| self.cells[n.index()].alive)
            .count()
    }

    /// Stage the next generation into every cell's `next_alive`
    ///
    /// Reads only `alive` and writes only `next_alive`, so no cell ever sees a
    /// neighbour that has already moved to the next generation.
    pub fn evaluate_generation(&mut self) {
        for index in 0..self.cells.len() {
            let count = self.alive_neighbors(index);
            let cell = &mut self.cells[index];
            cell.next_alive = rules::next_state(cell.alive, count);
        }
    }

    /// Make the staged generation current
    ///
    /// Must only follow a full [`evaluate_generation`](Self::evaluate_generation).
    pub fn commit_generation(&mut self) {
        for cell in &mut self.cells {
            cell.alive = cell.next_alive;
        }
    }

    /// Evaluate then commit one generation
    pub fn step(&mut self) {
        self.evaluate_generation();
        self.commit_generation();
    }

    /// Find the cell whose tile contains the pixel point
    pub fn cell_at(&self, x: f32, y: f32) -> Option<CellIndex> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let size = self.tile_size as f32;
        let col = (x / size) as usize;
        let row = (y / size) as usize;

        self.index_of(row, col)
            .filter(|&i| self.cells[i.index()].contains(x, y, self.tile_size))
    }

    /// Set the cell under a pixel point, bypassing the rules
    ///
    /// Returns whether a cell was hit. Points outside every tile are ignored.
    pub fn set_alive_at(&mut self, x: f32, y: f32, alive: bool) -> bool {
        match self.cell_at(x, y) {
            Some(index) => {
                self.cells[index.index()].alive = alive;
                true
            }
            None => false,
        }
    }

    /// Set every cell to `alive`
    pub fn set_all_alive(&mut self, alive: bool) {
        for cell in &mut self.cells {
            cell.alive = alive;
        }
    }

    /// Flip every cell
    pub fn invert_all(&mut self) {
        for cell in &mut self.cells {
            cell.alive = !cell.alive;
        }
    }

    /// Snapshot of the alive flags, row-major
    pub fn snapshot(&self) -> Vec<bool> {
        self.cells.iter().map(|c| c.alive).collect()
    }
}
