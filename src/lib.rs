//! Random partition of a rectangular board into tiles with pairwise distinct dimensions
//!
//! Generation starts from one tile covering the board and repeatedly splits a
//! random tile in two, as long as both pieces have dimensions no other tile
//! holds. A 3x5 and a 5x3 tile count as the same dimensions.

#![forbid(unsafe_code)]

/// Dimension bookkeeping, split search, and the generation driver
pub mod algorithm;
/// Command-line surface, configuration, logging, and error handling
pub mod io;
/// Tiles and the board they are laid out on
pub mod spatial;

pub use algorithm::collection::DivisibleTileCollection;
pub use algorithm::dimensions::{DimensionKey, DimensionSet, Dimensions};
pub use algorithm::executor::{GenerationConfig, TileGenerator, generate};
pub use algorithm::split::{Axis, Split};
pub use io::error::{GenerationError, Result};
pub use spatial::grid::{SplitRecord, TileBoard};
pub use spatial::tiles::{Tile, TileId, TileIdGenerator};
