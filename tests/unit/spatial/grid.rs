//! Tests for board coverage, placement, and split layout

#[cfg(test)]
mod tests {
    use uniquetile::algorithm::dimensions::Dimensions;
    use uniquetile::spatial::grid::TileBoard;
    use uniquetile::spatial::tiles::{Tile, TileId};

    fn covering_tile(board: &TileBoard) -> Tile {
        let Some(tile) = board.tiles().next().copied() else {
            unreachable!("a new board holds one tile");
        };
        tile
    }

    // Tests a new board is covered by one full-size tile
    // Verified by skipping the initial placement
    #[test]
    fn test_new_board_has_single_tile() {
        let board = TileBoard::from_seed(5, 3, 1);

        assert_eq!(board.tile_count(), 1);
        assert!(board.is_fully_covered());
        assert_eq!(board.tile_at(4, 2), Some(TileId(0)));
        assert_eq!(board.tile_at(5, 0), None);
        assert_eq!(covering_tile(&board).dimensions(), Dimensions::new(5, 3));
        assert_eq!(board.location(&covering_tile(&board)), Some((0, 0)));
    }

    // Tests the 4x4 board splits into one of its two legal layouts
    // Verified by placing the second piece at the origin
    #[test]
    fn test_split_layout_on_four_square() {
        for seed in 0..10 {
            let mut board = TileBoard::from_seed(4, 4, seed);
            let Some(record) = board.split_random_tile() else {
                unreachable!("4x4 board is divisible");
            };

            assert_eq!(record.parent.id(), TileId(0));
            assert_eq!(board.location(&record.first), Some((0, 0)));
            match record.first.dimensions() {
                Dimensions {
                    width: 3,
                    height: 4,
                } => {
                    assert_eq!(record.second.dimensions(), Dimensions::new(1, 4));
                    assert_eq!(board.location(&record.second), Some((3, 0)));
                }
                Dimensions {
                    width: 4,
                    height: 3,
                } => {
                    assert_eq!(record.second.dimensions(), Dimensions::new(4, 1));
                    assert_eq!(board.location(&record.second), Some((0, 3)));
                }
                other => unreachable!("unexpected first piece {other}"),
            }
            assert!(board.is_fully_covered());
            assert_eq!(board.tile_count(), 2);
        }
    }

    // Tests child ids continue the board's sequence
    // Verified by restarting ids for each split
    #[test]
    fn test_split_assigns_fresh_ids() {
        let mut board = TileBoard::from_seed(10, 10, 3);
        let Some(record) = board.split_random_tile() else {
            unreachable!("10x10 board is divisible");
        };

        assert_eq!(record.first.id(), TileId(1));
        assert_eq!(record.second.id(), TileId(2));
        assert_eq!(board.ids_issued(), 3);
    }

    // Tests a 4x4 board finishes after exactly two splits
    // Verified by never demoting tiles
    #[test]
    fn test_four_square_finishes_after_two_splits() {
        let mut board = TileBoard::from_seed(4, 4, 0);
        assert!(!board.is_finished());

        // 3x4 splits only into 3x3 + 3x1, 1x4 only into 1x3 + 1x1
        board.split_random_tile();
        assert_eq!(board.collection().divisible().len(), 2);
        assert!(board.collection().undivisible().is_empty());

        // Whichever goes first takes the 1x3 shape the other one needs
        board.split_random_tile();
        assert!(board.is_finished());
        assert_eq!(board.tile_count(), 3);
        assert!(board.is_fully_covered());
    }

    // Tests splitting a named tile and rejecting an unknown one
    // Verified by splitting without checking membership
    #[test]
    fn test_split_tile_requires_tracked_tile() {
        let mut board = TileBoard::from_seed(8, 2, 4);
        let full = covering_tile(&board);
        let stranger = Tile::new(TileId(99), Dimensions::new(8, 2));

        assert_eq!(board.split_tile(&stranger), None);
        assert_eq!(board.tile_count(), 1);

        let Some(record) = board.split_tile(&full) else {
            unreachable!("8x2 board is divisible");
        };
        assert_eq!(record.parent, full);
        assert_eq!(board.location(&full), None);
        assert!(board.is_fully_covered());
    }

    // Tests lifting clears cells and placing refills them
    // Verified by leaving cells set after lift
    #[test]
    fn test_lift_and_place() {
        let mut board = TileBoard::from_seed(6, 2, 1);
        let full = covering_tile(&board);

        assert!(board.lift(&full));
        assert_eq!(board.tile_count(), 0);
        assert_eq!(board.tile_at(0, 0), None);
        assert!(!board.lift(&full));

        let left = Tile::new(TileId(10), Dimensions::new(4, 2));
        let right = Tile::new(TileId(11), Dimensions::new(2, 2));
        assert!(board.place(left, 0, 0));
        assert!(board.place(right, 4, 0));
        assert!(board.is_fully_covered());
        assert_eq!(board.location(&right), Some((4, 0)));
    }

    // Tests placement rejects taken sizes, overflow, and overlap
    // Verified by removing each placement guard in turn
    #[test]
    fn test_place_rejections() {
        let mut board = TileBoard::from_seed(6, 6, 1);
        let full = covering_tile(&board);
        board.lift(&full);

        let small = Tile::new(TileId(20), Dimensions::new(2, 3));
        assert!(board.place(small, 0, 0));

        let rotated = Tile::new(TileId(21), Dimensions::new(3, 2));
        assert!(!board.place(rotated, 3, 3));

        let overflowing = Tile::new(TileId(22), Dimensions::new(4, 1));
        assert!(!board.place(overflowing, 3, 5));

        let overlapping = Tile::new(TileId(23), Dimensions::new(2, 2));
        assert!(!board.place(overlapping, 1, 1));

        assert_eq!(board.tile_count(), 1);
    }

    // Tests coordinates whose sum overflows are rejected rather than panicking
    // Verified by adding the tile extent without checking for overflow
    #[test]
    fn test_place_rejects_overflowing_coordinates() {
        let mut board = TileBoard::from_seed(4, 4, 1);
        let full = covering_tile(&board);
        board.lift(&full);

        let cell = Tile::new(TileId(30), Dimensions::new(1, 1));
        assert!(!board.place(cell, usize::MAX, 0));
        assert!(!board.place(cell, 0, usize::MAX));
        assert!(!board.place(cell, usize::MAX, usize::MAX));

        assert_eq!(board.tile_count(), 0);
        assert!(board.place(cell, 3, 3));
    }

    // Tests a board with a zero side holds no tiles
    // Verified by accepting zero-sided tiles in the collection
    #[test]
    fn test_zero_sided_board_is_empty() {
        let mut board = TileBoard::from_seed(0, 5, 1);

        assert_eq!(board.tile_count(), 0);
        assert!(board.is_finished());
        assert_eq!(board.split_random_tile(), None);

        let flat = Tile::new(TileId(40), Dimensions::new(0, 2));
        assert!(!board.place(flat, 0, 0));
        assert_eq!(board.tile_count(), 0);
    }

    // Tests a refused split leaves tiles, cells, and ids untouched
    // Verified by lifting the tile before checking it can be split
    #[test]
    fn test_refused_split_leaves_board_unchanged() {
        let mut board = TileBoard::from_seed(4, 4, 2);
        let Some(record) = board.split_random_tile() else {
            unreachable!("4x4 board is divisible");
        };
        board.split_random_tile();
        assert!(board.is_finished());

        let before: Vec<Option<TileId>> = (0..4)
            .flat_map(|x| (0..4).map(move |y| (x, y)))
            .map(|(x, y)| board.tile_at(x, y))
            .collect();
        let issued = board.ids_issued();

        for tile in [record.first, record.second, record.parent] {
            assert_eq!(board.split_tile(&tile), None);
        }

        let after: Vec<Option<TileId>> = (0..4)
            .flat_map(|x| (0..4).map(move |y| (x, y)))
            .map(|(x, y)| board.tile_at(x, y))
            .collect();
        assert_eq!(before, after);
        assert_eq!(board.ids_issued(), issued);
        assert_eq!(board.tile_count(), 3);
        assert!(board.is_fully_covered());
    }

    // Tests a board that cannot be split reports None
    // Verified by returning the parent as a split
    #[test]
    fn test_split_random_tile_on_finished_board() {
        let mut board = TileBoard::from_seed(2, 3, 1);

        assert!(board.is_finished());
        assert_eq!(board.split_random_tile(), None);
        assert_eq!(board.tile_count(), 1);
        assert!(board.is_fully_covered());
    }
}
