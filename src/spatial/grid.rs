//! Board of cells covered by tiles with pairwise distinct dimensions
//!
//! The board owns the tile collection and the id generator for one run and
//! maps every cell to the tile covering it. Splitting a tile clears its cells
//! and lays the two pieces side by side in the same footprint, so the board
//! stays fully covered.

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::algorithm::collection::DivisibleTileCollection;
use crate::algorithm::dimensions::Dimensions;
use crate::algorithm::split::Axis;
use crate::spatial::tiles::{Tile, TileId, TileIdGenerator};

/// Outcome of one split
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitRecord {
    /// Tile that was removed
    pub parent: Tile,
    /// Piece placed at the parent's origin
    pub first: Tile,
    /// Piece placed after `first` along the cut axis
    pub second: Tile,
}

/// Rectangular board partitioned into tiles
///
/// Cells are indexed `[x, y]` with `x < width` and `y < height`.
#[derive(Debug)]
pub struct TileBoard<R = StdRng> {
    cells: Array2<Option<TileId>>,
    tiles: DivisibleTileCollection<R>,
    ids: TileIdGenerator,
    dimensions: Dimensions,
}

impl TileBoard<StdRng> {
    /// Create a board covered by a single tile, driven by a seeded `StdRng`
    pub fn from_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TileBoard<R> {
    /// Create a board covered by a single tile of the board's size
    ///
    /// A board with a zero side has no cells and holds no tiles.
    pub fn with_rng(width: usize, height: usize, rng: R) -> Self {
        let dimensions = Dimensions::new(width, height);
        let mut board = Self {
            cells: Array2::from_elem((width, height), None),
            tiles: DivisibleTileCollection::with_rng(rng),
            ids: TileIdGenerator::new(),
            dimensions,
        };

        let full = board.ids.create(dimensions);
        board.place(full, 0, 0);
        board
    }

    /// Board width in cells
    pub const fn width(&self) -> usize {
        self.dimensions.width
    }

    /// Board height in cells
    pub const fn height(&self) -> usize {
        self.dimensions.height
    }

    /// Tile covering a cell, if any
    pub fn tile_at(&self, x: usize, y: usize) -> Option<TileId> {
        self.cells.get([x, y]).copied().flatten()
    }

    /// Top-left cell of a tile on the board
    pub fn location(&self, tile: &Tile) -> Option<(usize, usize)> {
        // Row-major order meets the top-left corner of a rectangle first
        self.cells
            .indexed_iter()
            .find(|(_, cell)| **cell == Some(tile.id()))
            .map(|(position, _)| position)
    }

    /// Put a tile on the board with its top-left cell at `(x, y)`
    ///
    /// Fails when the dimensions are already taken, the tile does not fit
    /// inside the board, or any target cell is occupied.
    pub fn place(&mut self, tile: Tile, x: usize, y: usize) -> bool {
        let fits = x.checked_add(tile.width()).is_some_and(|end| end <= self.width())
            && y.checked_add(tile.height()).is_some_and(|end| end <= self.height());
        if !fits || self.tiles.contains(&tile) || !self.is_vacant(x, y, tile.dimensions()) {
            debug!(tile = %tile, x, y, "rejected placement");
            return false;
        }

        if !self.tiles.add(tile) {
            return false;
        }
        self.fill(x, y, tile.dimensions(), Some(tile.id()));
        true
    }

    /// Take a tile off the board, leaving its cells empty
    pub fn lift(&mut self, tile: &Tile) -> bool {
        let Some((x, y)) = self.location(tile) else {
            return false;
        };
        if !self.tiles.remove(tile) {
            return false;
        }
        self.fill(x, y, tile.dimensions(), None);
        true
    }

    /// Split a specific tile at a random legal cut
    ///
    /// Returns `None` and leaves the board untouched when the tile is not on
    /// the board or has no legal split.
    pub fn split_tile(&mut self, tile: &Tile) -> Option<SplitRecord> {
        if !self.tiles.is_tracked(tile) || !self.tiles.is_divisible(tile) {
            return None;
        }
        self.tiles.remove(tile);
        self.split_detached(*tile)
    }

    /// Split a uniformly chosen divisible tile at a random legal cut
    ///
    /// Returns `None` once no tile can be split.
    pub fn split_random_tile(&mut self) -> Option<SplitRecord> {
        let tile = self.tiles.take_random()?;
        self.split_detached(tile)
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile on the board can be split any further
    pub fn is_finished(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether every cell is covered by some tile
    pub fn is_fully_covered(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All tiles on the board
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Underlying collection with divisibility bookkeeping
    pub const fn collection(&self) -> &DivisibleTileCollection<R> {
        &self.tiles
    }

    /// Number of tile ids issued on this board, including split parents
    pub const fn ids_issued(&self) -> usize {
        self.ids.issued()
    }

    /// Replace a tile already removed from the collection by its two pieces
    fn split_detached(&mut self, parent: Tile) -> Option<SplitRecord> {
        let Some((x, y)) = self.location(&parent) else {
            self.tiles.add(parent);
            return None;
        };
        let Some(split) = self.tiles.dimensions_after_split(&parent) else {
            self.tiles.add(parent);
            return None;
        };

        self.fill(x, y, parent.dimensions(), None);

        let first = self.ids.create(split.first);
        let second = self.ids.create(split.second);
        let (second_x, second_y) = match split.axis {
            Axis::Width => (x + first.width(), y),
            Axis::Height => (x, y + first.height()),
        };

        // Pieces are untaken and differ from each other by construction
        let placed_first = self.place(first, x, y);
        if !placed_first || !self.place(second, second_x, second_y) {
            debug!(parent = %parent, ?split, "failed to place split pieces");
            if placed_first {
                self.lift(&first);
            }
            self.place(parent, x, y);
            return None;
        }

        debug!(parent = %parent, first = %first, second = %second, "split tile");
        Some(SplitRecord {
            parent,
            first,
            second,
        })
    }

    fn is_vacant(&self, x: usize, y: usize, dimensions: Dimensions) -> bool {
        let x_end = x.saturating_add(dimensions.width);
        let y_end = y.saturating_add(dimensions.height);
        (x..x_end).all(|i| (y..y_end).all(|j| self.tile_at(i, j).is_none()))
    }

    fn fill(&mut self, x: usize, y: usize, dimensions: Dimensions, value: Option<TileId>) {
        let x_end = x.saturating_add(dimensions.width).min(self.width());
        let y_end = y.saturating_add(dimensions.height).min(self.height());
        for i in x..x_end {
            for j in y..y_end {
                if let Some(cell) = self.cells.get_mut([i, j]) {
                    *cell = value;
                }
            }
        }
    }
}
