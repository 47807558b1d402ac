//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Tile values and id generation
//! - The board grid that maps cells to tiles

/// Board grid and split placement
pub mod grid;
/// Tile values and id generation
pub mod tiles;

pub use grid::TileBoard;
