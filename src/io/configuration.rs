//! Generation constants and runtime configuration defaults

// Default board mirrors the classic 10x10 demonstration run
/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 10;
/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 10;

/// Default maximum number of tiles before generation stops
pub const DEFAULT_TILE_LIMIT: usize = 10;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Every mutation rescans the whole collection, so very large boards get slow
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 1_000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging filters used when `RUST_LOG` is unset
/// Filter for normal runs
pub const DEFAULT_LOG_FILTER: &str = "uniquetile=info";
/// Filter for `--verbose` runs
pub const VERBOSE_LOG_FILTER: &str = "uniquetile=debug";
