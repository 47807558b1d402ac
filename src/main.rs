//! CLI entry point for the unique-dimension tile board generator

use clap::Parser;
use uniquetile::io::cli::{BoardRunner, Cli};
use uniquetile::io::logging::init_tracing;

fn main() -> uniquetile::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    BoardRunner::new(cli).run()
}
