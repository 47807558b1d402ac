use crate::{
    io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_TILE_LIMIT, DEFAULT_WIDTH, MAX_BOARD_DIMENSION,
    },
    io::error::{Result, invalid_parameter},
    spatial::grid::{SplitRecord, TileBoard},
};
use tracing::info;

/// Parameters of one generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Stop once this many tiles exist (`None` runs until no tile can be split)
    pub tile_limit: Option<usize>,
    /// Seed for the random source
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_limit: Some(DEFAULT_TILE_LIMIT),
            seed: DEFAULT_SEED,
        }
    }
}

impl GenerationConfig {
    /// Unlimited run on a `width × height` board with the default seed
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tile_limit: None,
            seed: DEFAULT_SEED,
        }
    }

    /// Set the tile limit
    #[must_use]
    pub const fn with_tile_limit(mut self, tile_limit: usize) -> Self {
        self.tile_limit = Some(tile_limit);
        self
    }

    /// Set the seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Upper bound on the number of tiles this run can produce
    ///
    /// Every tile covers at least one cell, so the board area bounds the count.
    pub fn max_tiles(&self) -> usize {
        let area = self.width * self.height;
        self.tile_limit.map_or(area, |limit| limit.min(area))
    }

    /// Check that the parameters describe a usable board
    ///
    /// # Errors
    ///
    /// Returns an error if a board side is zero or exceeds
    /// `MAX_BOARD_DIMENSION`, or if the tile limit is zero
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
            if value > MAX_BOARD_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_BOARD_DIMENSION}"),
                ));
            }
        }

        if self.tile_limit == Some(0) {
            return Err(invalid_parameter("tiles", &0, &"must be at least 1"));
        }

        Ok(())
    }
}

/// Repeatedly splits random tiles until the board is finished or the limit is hit
///
/// Each split replaces one tile with two, so a run performs at most
/// `width * height - 1` iterations.
#[derive(Debug)]
pub struct TileGenerator {
    /// Parameters of this run
    pub config: GenerationConfig,
    /// Board being partitioned
    pub board: TileBoard,
    /// Every split performed, in order
    pub history: Vec<SplitRecord>,
    /// Number of splits performed
    pub iteration: usize,
}

impl TileGenerator {
    /// Create a generator with a board covered by one full-size tile
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: GenerationConfig) -> Result<Self> {
        config.validate()?;

        info!(
            width = config.width,
            height = config.height,
            tile_limit = ?config.tile_limit,
            seed = config.seed,
            "starting generation"
        );

        Ok(Self {
            config,
            board: TileBoard::from_seed(config.width, config.height, config.seed),
            history: Vec::new(),
            iteration: 0,
        })
    }

    /// Whether another split is allowed and possible
    pub fn should_continue(&self) -> bool {
        !self.board.is_finished()
            && self
                .config
                .tile_limit
                .is_none_or(|limit| self.board.tile_count() < limit)
    }

    /// Split one random tile
    ///
    /// Returns `false` once generation has stopped.
    pub fn execute_iteration(&mut self) -> bool {
        if !self.should_continue() {
            return false;
        }

        let Some(record) = self.board.split_random_tile() else {
            return false;
        };
        self.history.push(record);
        self.iteration += 1;
        true
    }

    /// Run to completion, calling `on_split` after every split
    ///
    /// Returns the number of splits performed by this call.
    pub fn run_with<F>(&mut self, mut on_split: F) -> usize
    where
        F: FnMut(&TileBoard),
    {
        let start = self.iteration;
        let max_iterations = self.config.width * self.config.height;

        for _ in start..max_iterations {
            if !self.execute_iteration() {
                break;
            }
            on_split(&self.board);
        }

        info!(
            splits = self.iteration - start,
            tiles = self.board.tile_count(),
            finished = self.board.is_finished(),
            "generation stopped"
        );
        self.iteration - start
    }

    /// Run to completion
    pub fn run(&mut self) -> usize {
        self.run_with(|_| {})
    }

    /// Access the board
    pub const fn board(&self) -> &TileBoard {
        &self.board
    }

    /// Splits performed so far
    pub fn history(&self) -> &[SplitRecord] {
        &self.history
    }

    /// Consume the generator, keeping the board
    pub fn into_board(self) -> TileBoard {
        self.board
    }
}

/// Generate a board in one call
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn generate(config: GenerationConfig) -> Result<TileBoard> {
    let mut generator = TileGenerator::new(config)?;
    generator.run();
    Ok(generator.into_board())
}
