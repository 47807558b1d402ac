//! Tiles with pairwise distinct dimensions, classified by whether they can still be split
//!
//! Divisibility is a global property: whether a tile can be split depends on
//! which sizes every other tile currently holds. Each mutation therefore ends
//! with a reclassification pass so that, between calls, a tile sits in the
//! divisible set exactly when some split of it yields two untaken sizes.

use crate::algorithm::dimensions::{DimensionSet, Dimensions};
use crate::algorithm::split::{self, Split};
use crate::spatial::tiles::Tile;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt;
use tracing::{debug, trace};

/// Tiles moved between the two classes by a reclassification pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reclassification {
    /// Tiles that became divisible
    pub promoted: usize,
    /// Tiles that stopped being divisible
    pub demoted: usize,
}

/// Collection of tiles with unique dimensions and split bookkeeping
///
/// The random source is injectable so that a seeded run is reproducible.
#[derive(Debug)]
pub struct DivisibleTileCollection<R = StdRng> {
    divisible: Vec<Tile>,
    undivisible: Vec<Tile>,
    taken: DimensionSet,
    rng: R,
}

impl DivisibleTileCollection<StdRng> {
    /// Create an empty collection driven by a seeded `StdRng`
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DivisibleTileCollection<R> {
    /// Create an empty collection with the given random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            divisible: Vec::new(),
            undivisible: Vec::new(),
            taken: DimensionSet::new(),
            rng,
        }
    }

    /// Track a tile unless another tile already has its dimensions
    ///
    /// Returns `false` without touching any state on a dimension clash or
    /// when either side of the tile is zero.
    pub fn add(&mut self, tile: Tile) -> bool {
        if tile.dimensions().is_degenerate() {
            debug!(tile = %tile, "rejected tile with a zero side");
            return false;
        }
        if !self.taken.insert(tile.dimensions()) {
            debug!(tile = %tile, "rejected tile with taken dimensions");
            return false;
        }

        if self.is_divisible(&tile) {
            self.divisible.push(tile);
        } else {
            self.undivisible.push(tile);
        }

        // A newly taken size can only block other tiles, never free them
        let demoted = self.demote_blocked();
        debug!(tile = %tile, demoted, "added tile");
        true
    }

    /// Stop tracking a tile
    ///
    /// Returns `false` if this exact tile is not tracked.
    pub fn remove(&mut self, tile: &Tile) -> bool {
        let Some(removed) = Self::take_from(&mut self.divisible, tile)
            .or_else(|| Self::take_from(&mut self.undivisible, tile))
        else {
            debug!(tile = %tile, "ignored removal of untracked tile");
            return false;
        };

        self.taken.remove(removed.dimensions());

        // A released size can only free other tiles, never block them
        let promoted = self.promote_unblocked();
        debug!(tile = %removed, promoted, "removed tile");
        true
    }

    /// Remove and return a uniformly chosen divisible tile
    ///
    /// Returns `None` when no tracked tile can be split.
    pub fn take_random(&mut self) -> Option<Tile> {
        if self.divisible.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..self.divisible.len());
        let tile = self.divisible.get(index).copied()?;
        self.remove(&tile);
        Some(tile)
    }

    /// Test whether a tile with these dimensions (in either orientation) is tracked
    pub fn contains(&self, tile: &Tile) -> bool {
        self.taken.contains(tile.dimensions())
    }

    /// Test whether a size (in either orientation) is taken
    pub fn contains_dimensions(&self, dimensions: Dimensions) -> bool {
        self.taken.contains(dimensions)
    }

    /// Test whether this exact tile, id included, is tracked
    pub fn is_tracked(&self, tile: &Tile) -> bool {
        self.divisible.contains(tile) || self.undivisible.contains(tile)
    }

    /// Whether some split of the tile yields two currently untaken sizes
    pub fn is_divisible(&self, tile: &Tile) -> bool {
        Self::can_split(&self.taken, tile)
    }

    /// Pick a random legal split of the tile against the current taken sizes
    pub fn dimensions_after_split(&mut self, tile: &Tile) -> Option<Split> {
        let taken = &self.taken;
        let split = split::find_split(tile.dimensions(), |d| taken.contains(d), &mut self.rng);
        trace!(tile = %tile, ?split, "searched for split");
        split
    }

    /// Re-derive both classes from the current taken sizes
    ///
    /// Afterwards every divisible tile has a legal split and no undivisible
    /// tile has one. `add` and `remove` run the relevant half of this pass.
    pub fn reclassify(&mut self) -> Reclassification {
        let demoted = self.demote_blocked();
        let promoted = self.promote_unblocked();
        Reclassification { promoted, demoted }
    }

    /// Number of tracked tiles, divisible or not
    pub fn len(&self) -> usize {
        self.divisible.len() + self.undivisible.len()
    }

    /// Whether no tracked tile can be split any further
    ///
    /// A collection holding only undivisible tiles counts as empty: there is
    /// nothing left for `take_random` to return.
    pub fn is_empty(&self) -> bool {
        self.divisible.is_empty()
    }

    /// Tiles that currently have a legal split
    pub fn divisible(&self) -> &[Tile] {
        &self.divisible
    }

    /// Tiles that currently have no legal split
    pub fn undivisible(&self) -> &[Tile] {
        &self.undivisible
    }

    /// Sizes held by tracked tiles
    pub const fn taken(&self) -> &DimensionSet {
        &self.taken
    }

    /// All tracked tiles, divisible first
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.divisible.iter().chain(self.undivisible.iter())
    }

    fn can_split(taken: &DimensionSet, tile: &Tile) -> bool {
        split::has_split(tile.dimensions(), |d| taken.contains(d))
    }

    fn take_from(tiles: &mut Vec<Tile>, tile: &Tile) -> Option<Tile> {
        let index = tiles.iter().position(|candidate| candidate == tile)?;
        Some(tiles.remove(index))
    }

    fn demote_blocked(&mut self) -> usize {
        let taken = &self.taken;
        let (still_divisible, blocked): (Vec<Tile>, Vec<Tile>) = std::mem::take(&mut self.divisible)
            .into_iter()
            .partition(|tile| Self::can_split(taken, tile));

        let demoted = blocked.len();
        self.divisible = still_divisible;
        self.undivisible.extend(blocked);
        demoted
    }

    fn promote_unblocked(&mut self) -> usize {
        let taken = &self.taken;
        let (freed, still_blocked): (Vec<Tile>, Vec<Tile>) = std::mem::take(&mut self.undivisible)
            .into_iter()
            .partition(|tile| Self::can_split(taken, tile));

        let promoted = freed.len();
        self.undivisible = still_blocked;
        self.divisible.extend(freed);
        promoted
    }
}

impl<R> fmt::Display for DivisibleTileCollection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.divisible {
            writeln!(f, "{tile} [DIVISIBLE]")?;
        }
        for tile in &self.undivisible {
            writeln!(f, "{tile} [UNDIVISIBLE]")?;
        }
        Ok(())
    }
}
