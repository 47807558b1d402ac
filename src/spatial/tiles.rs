//! Tile values and the id source that names them
//!
//! A tile knows its size and identity but not where it sits; placement is the
//! grid's concern. Ids come from an explicit generator owned by whoever creates
//! tiles, so independent generation runs never share a counter.

use crate::algorithm::dimensions::Dimensions;
use std::fmt;

/// Identifier assigned to a tile at creation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable rectangle with a unique id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    id: TileId,
    dimensions: Dimensions,
}

impl Tile {
    /// Create a tile with an explicit id
    ///
    /// Prefer [`TileIdGenerator::create`], which guarantees uniqueness.
    pub const fn new(id: TileId, dimensions: Dimensions) -> Self {
        Self { id, dimensions }
    }

    /// Identifier of this tile
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Oriented size
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Extent along x
    pub const fn width(&self) -> usize {
        self.dimensions.width
    }

    /// Extent along y
    pub const fn height(&self) -> usize {
        self.dimensions.height
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.dimensions.area()
    }

    /// Longer of the two sides
    pub const fn largest_side(&self) -> usize {
        self.dimensions.key().largest()
    }

    /// Shorter of the two sides
    pub const fn smallest_side(&self) -> usize {
        self.dimensions.key().smallest()
    }

    /// Whether `other` has the same size up to rotation, ignoring ids
    pub fn has_same_dimensions(&self, other: &Self) -> bool {
        self.dimensions.same_shape(other.dimensions)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, width: {}, height: {}",
            self.id,
            self.width(),
            self.height()
        )
    }
}

/// Monotonic id source for one generation run
#[derive(Debug, Default)]
pub struct TileIdGenerator {
    next: usize,
}

impl TileIdGenerator {
    /// Start a fresh sequence at zero
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Hand out the next id
    pub const fn next_id(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }

    /// Create a tile with the next id
    pub const fn create(&mut self, dimensions: Dimensions) -> Tile {
        Tile::new(self.next_id(), dimensions)
    }

    /// Number of ids issued so far
    pub const fn issued(&self) -> usize {
        self.next
    }
}
