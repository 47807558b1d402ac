//! Plain-text rendering of a board for visual inspection
//!
//! The layout is a debugging aid, not a stable format.

use crate::spatial::grid::TileBoard;

/// Render one line per board row, each cell showing the id of its tile
///
/// Ids are right-aligned to the widest id issued so far and followed by a
/// comma; uncovered cells show `-`.
pub fn render_board<R>(board: &TileBoard<R>) -> String
where
    R: rand::Rng,
{
    let id_width = digit_count(board.ids_issued().saturating_sub(1));
    let mut output = String::new();

    for y in 0..board.height() {
        for x in 0..board.width() {
            match board.tile_at(x, y) {
                Some(id) => output.push_str(&format!("{:>id_width$},", id.0)),
                None => output.push_str(&format!("{:>id_width$},", "-")),
            }
        }
        output.push('\n');
    }

    output
}

/// Render the tile listing with each tile tagged divisible or undivisible
pub fn render_summary<R>(board: &TileBoard<R>) -> String
where
    R: rand::Rng,
{
    board.collection().to_string()
}

/// Number of decimal digits needed to print `n`
pub const fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
