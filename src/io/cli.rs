//! Command-line interface for generating and printing a board

use crate::algorithm::executor::{GenerationConfig, TileGenerator};
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_TILE_LIMIT, DEFAULT_WIDTH};
use crate::io::error::{Result, WithOperation};
use crate::io::progress::SplitProgress;
use crate::io::visualization::{render_board, render_summary};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "uniquetile")]
#[command(
    author,
    version,
    about = "Partition a board into tiles that all have different dimensions"
)]
/// Command-line arguments for the board generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Board width in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Maximum number of tiles before stopping
    #[arg(short, long, default_value_t = DEFAULT_TILE_LIMIT)]
    pub tiles: usize,

    /// Ignore the tile limit and split until no tile can be split
    #[arg(short, long, conflicts_with = "tiles")]
    pub unlimited: bool,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the tile listing after the board
    #[arg(long)]
    pub no_summary: bool,
}

impl Cli {
    /// Generation parameters described by the arguments
    pub const fn config(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            tile_limit: if self.unlimited {
                None
            } else {
                Some(self.tiles)
            },
            seed: self.seed,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the tile listing should be printed
    pub const fn should_print_summary(&self) -> bool {
        !self.no_summary
    }
}

/// Runs one generation and writes the result
pub struct BoardRunner {
    cli: Cli,
}

impl BoardRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate a board and write it to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or stdout cannot be written
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Generate a board and write the rendering to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or `out` cannot be written
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let config = self.cli.config();
        let mut generator = TileGenerator::new(config)?;

        let progress = if self.cli.should_show_progress() {
            SplitProgress::new(config.max_tiles())
        } else {
            SplitProgress::hidden()
        };
        progress.update(generator.board().tile_count());

        generator.run_with(|board| progress.update(board.tile_count()));
        progress.finish(generator.board().is_finished());

        let board = generator.board();
        write!(out, "{}", render_board(board)).with_operation("write board")?;
        if self.cli.should_print_summary() {
            write!(out, "\n{}", render_summary(board)).with_operation("write tile listing")?;
        }
        out.flush().with_operation("flush output")?;

        Ok(())
    }
}
