//! Oriented tile sizes and the set of dimensions currently taken on a board
//!
//! A tile's size is oriented (`width × height`) so that it can be placed on a grid,
//! but uniqueness is judged on the unordered pair: a 3x5 tile and a 5x3 tile collide.

use crate::algorithm::split::Axis;
use std::collections::HashSet;
use std::fmt;

/// Oriented size of a tile in grid cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Extent along the x axis
    pub width: usize,
    /// Extent along the y axis
    pub height: usize,
}

impl Dimensions {
    /// Create an oriented size
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Canonical unordered form used for uniqueness checks
    pub const fn key(self) -> DimensionKey {
        DimensionKey::new(self.width, self.height)
    }

    /// Whether either side is zero, so the size covers no cells
    pub const fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of cells covered
    pub const fn area(self) -> usize {
        self.width * self.height
    }

    /// Extent along the given axis
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Copy of this size with the extent along `axis` replaced
    #[must_use]
    pub const fn with_extent(self, axis: Axis, length: usize) -> Self {
        match axis {
            Axis::Width => Self::new(length, self.height),
            Axis::Height => Self::new(self.width, length),
        }
    }

    /// Whether both sizes describe the same rectangle up to rotation
    pub fn same_shape(self, other: Self) -> bool {
        self.key() == other.key()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Unordered (largest side, smallest side) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DimensionKey {
    largest: usize,
    smallest: usize,
}

impl DimensionKey {
    /// Canonicalize two side lengths
    pub const fn new(a: usize, b: usize) -> Self {
        if a >= b {
            Self {
                largest: a,
                smallest: b,
            }
        } else {
            Self {
                largest: b,
                smallest: a,
            }
        }
    }

    /// Longer side
    pub const fn largest(self) -> usize {
        self.largest
    }

    /// Shorter side
    pub const fn smallest(self) -> usize {
        self.smallest
    }
}

/// Dimensions held by live tiles
///
/// At most one live tile may own any given key, so presence here is the
/// single source of truth for "is this size still available".
#[derive(Clone, Debug, Default)]
pub struct DimensionSet {
    taken: HashSet<DimensionKey>,
}

impl DimensionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a size as taken, returning `false` if it already was
    pub fn insert(&mut self, dimensions: Dimensions) -> bool {
        self.taken.insert(dimensions.key())
    }

    /// Release a size, returning `false` if it was not taken
    pub fn remove(&mut self, dimensions: Dimensions) -> bool {
        self.taken.remove(&dimensions.key())
    }

    /// Test whether a size (in either orientation) is taken
    pub fn contains(&self, dimensions: Dimensions) -> bool {
        self.taken.contains(&dimensions.key())
    }

    /// Number of taken sizes
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Test if no size is taken
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}
