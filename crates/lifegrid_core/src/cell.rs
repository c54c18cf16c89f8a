//! A single tile of the grid
//!
//! Cells carry their own position, their current and staged state, and the
//! indices of their Moore neighbours inside the owning [`Grid`](crate::Grid).

/// Number of neighbour slots in a Moore neighbourhood
pub const NEIGHBOR_SLOTS: usize = 8;

/// Row/column offsets for each neighbour slot
///
/// Order: top, bottom, left, right, top-left, top-right, bottom-left, bottom-right.
pub const NEIGHBOR_OFFSETS: [(isize, isize); NEIGHBOR_SLOTS] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Index of a cell in the grid's arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex(usize);

impl CellIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw arena index
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One tile of the Game of Life grid
#[derive(Clone, Debug)]
pub struct Cell {
    /// Row (`i`)
    row: usize,
    /// Column (`j`)
    col: usize,
    /// Pixel x of the tile's top-left corner
    x: u32,
    /// Pixel y of the tile's top-left corner
    y: u32,
    /// Current state
    pub(crate) alive: bool,
    /// Staged state for the next generation. Stale outside evaluate/commit.
    pub(crate) next_alive: bool,
    /// Neighbour slots; `None` past a grid edge
    pub(crate) neighbors: [Option<CellIndex>; NEIGHBOR_SLOTS],
}

impl Cell {
    /// Create a dead cell at `(row, col)` with tiles of `tile_size` pixels
    pub fn new(row: usize, col: usize, tile_size: u32) -> Self {
        Self {
            row,
            col,
            x: col as u32 * tile_size,
            y: row as u32 * tile_size,
            alive: false,
            next_alive: false,
            neighbors: [None; NEIGHBOR_SLOTS],
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Pixel origin `(x, y)` of the tile
    #[inline]
    pub fn origin(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// The state staged by the last evaluation
    #[inline]
    pub fn next_alive(&self) -> bool {
        self.next_alive
    }

    /// Neighbour slots, `None` where the grid ends
    pub fn neighbors(&self) -> &[Option<CellIndex>; NEIGHBOR_SLOTS] {
        &self.neighbors
    }

    /// Number of neighbours that exist (3, 5 or 8 on grids of at least 2x2)
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }

    /// Check whether the pixel point falls inside this tile
    ///
    /// Bounds are half-open so adjacent tiles never share a point.
    pub fn contains(&self, px: f32, py: f32, tile_size: u32) -> bool {
        let (x, y) = (self.x as f32, self.y as f32);
        let size = tile_size as f32;
        px >= x && px < x + size && py >= y && py < y + size
    }
}
