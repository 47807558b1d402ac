//! Split enumeration and uniform selection of a legal split
//!
//! A split cuts a tile along one axis at an integer offset `j`, producing a
//! piece of length `len - j` and a piece of length `j`. Only offsets with
//! `j < len / 2` (integer division) are considered, so an axis shorter than
//! four cells never yields a candidate and the two pieces always differ.

use crate::algorithm::dimensions::Dimensions;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Axis a split cuts across
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The cut shortens the width; both pieces keep the parent's height
    Width,
    /// The cut shortens the height; both pieces keep the parent's width
    Height,
}

impl Axis {
    /// Enumeration order used for candidate generation
    pub const ALL: [Self; 2] = [Self::Width, Self::Height];
}

/// Sizes of the two tiles produced by cutting a parent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split {
    /// Axis that was cut
    pub axis: Axis,
    /// Larger piece, placed at the parent's origin
    pub first: Dimensions,
    /// Smaller piece, placed after `first` along `axis`
    pub second: Dimensions,
}

impl Split {
    /// Both resulting sizes as a pair
    pub const fn dimensions(&self) -> (Dimensions, Dimensions) {
        (self.first, self.second)
    }

    /// Whether neither piece collides with a taken size
    pub fn is_available<F>(&self, is_taken: F) -> bool
    where
        F: Fn(Dimensions) -> bool,
    {
        !is_taken(self.first) && !is_taken(self.second)
    }
}

/// Every syntactically valid split of a tile, ignoring taken sizes
///
/// Width-axis candidates come first, in increasing cut offset, followed by
/// height-axis candidates.
pub fn candidate_splits(dimensions: Dimensions) -> Vec<Split> {
    let mut candidates = Vec::new();
    if dimensions.is_degenerate() {
        return candidates;
    }

    for axis in Axis::ALL {
        let length = dimensions.along(axis);
        for cut in 1..length / 2 {
            let remainder = length - cut;
            if remainder == cut {
                continue;
            }
            candidates.push(Split {
                axis,
                first: dimensions.with_extent(axis, remainder),
                second: dimensions.with_extent(axis, cut),
            });
        }
    }

    candidates
}

/// Test whether any split leaves both pieces with untaken sizes
///
/// Consumes no randomness, so classification never perturbs the random stream.
pub fn has_split<F>(dimensions: Dimensions, is_taken: F) -> bool
where
    F: Fn(Dimensions) -> bool,
{
    candidate_splits(dimensions)
        .iter()
        .any(|split| split.is_available(&is_taken))
}

/// Pick a legal split uniformly at random
///
/// The choice is uniform over splits whose pieces are both untaken, which is
/// the same distribution as shuffling all candidates and taking the first
/// feasible one. Returns `None` when no such split exists.
pub fn find_split<F, R>(dimensions: Dimensions, is_taken: F, rng: &mut R) -> Option<Split>
where
    F: Fn(Dimensions) -> bool,
    R: Rng + ?Sized,
{
    let feasible: Vec<Split> = candidate_splits(dimensions)
        .into_iter()
        .filter(|split| split.is_available(&is_taken))
        .collect();

    feasible.choose(rng).copied()
}
