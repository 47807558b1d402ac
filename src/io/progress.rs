//! Progress display for a generation run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Tiles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks the tile count of a run against its upper bound
///
/// The bound is only reached by runs that stop at their tile limit; a run
/// that finishes early ends with a partially filled bar.
pub struct SplitProgress {
    bar: ProgressBar,
}

impl SplitProgress {
    /// Create a visible progress bar for up to `max_tiles` tiles
    pub fn new(max_tiles: usize) -> Self {
        let bar = ProgressBar::new(max_tiles as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the current number of tiles
    pub fn update(&self, tile_count: usize) {
        self.bar.set_position(tile_count as u64);
    }

    /// Last reported tile count
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Stop drawing and clear the bar
    pub fn finish(&self, finished: bool) {
        if finished {
            self.bar.set_message("no divisible tiles left");
        } else {
            self.bar.set_message("tile limit reached");
        }
        self.bar.finish_and_clear();
    }
}
