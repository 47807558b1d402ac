//! Tests for run progress tracking

#[cfg(test)]
mod tests {
    use uniquetile::io::progress::SplitProgress;

    // Tests the hidden tracker still records positions
    // Verified by skipping set_position for hidden bars
    #[test]
    fn test_hidden_progress_tracks_position() {
        let progress = SplitProgress::hidden();
        progress.update(3);
        assert_eq!(progress.position(), 3);
        progress.finish(true);
    }

    // Tests a visible tracker accepts updates up to its bound
    // Verified by clamping updates to zero
    #[test]
    fn test_visible_progress_updates() {
        let progress = SplitProgress::new(10);
        progress.update(1);
        progress.update(10);
        assert_eq!(progress.position(), 10);
        progress.finish(false);
    }
}
