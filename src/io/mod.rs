/// Command-line argument parsing and the board runner
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types for generation runs
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress display for generation runs
pub mod progress;
/// Plain-text board rendering
pub mod visualization;
