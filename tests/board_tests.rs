//! Board tests - public API coverage for the grid storage

use tui_2048::core::Board;

#[test]
fn test_board_new_empty() {
    let board = Board::new(4);
    assert_eq!(board.size(), 4);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(board.get(x, y), Some(0), "cell ({x}, {y}) should be empty");
        }
    }
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().len(), 16);
    assert_eq!(board.max_tile(), 0);
    assert_eq!(board.tile_sum(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(4);
    assert_eq!(board.get(4, 0), None);
    assert_eq!(board.get(0, 4), None);
    assert_eq!(board.get(4, 4), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(5);
    assert!(board.set(2, 3, 16));
    assert_eq!(board.get(2, 3), Some(16));

    assert!(board.set(2, 3, 0));
    assert_eq!(board.get(2, 3), Some(0));

    assert!(!board.set(5, 0, 2));
    assert!(!board.set(0, 5, 2));
}

#[test]
fn test_board_clear() {
    let mut board = Board::new(4);
    board.set(0, 0, 2);
    board.set(3, 3, 2048);
    board.clear();
    assert_eq!(board.tile_sum(), 0);
    assert_eq!(board.empty_cells().len(), 16);
}

#[test]
fn test_board_rows_roundtrip() {
    let rows = vec![
        vec![2, 0, 4, 0],
        vec![0, 8, 0, 16],
        vec![32, 0, 64, 0],
        vec![0, 128, 0, 256],
    ];
    let board = Board::from_rows(&rows);
    assert_eq!(board.rows(), rows);
    assert_eq!(board.get(0, 0), Some(2));
    assert_eq!(board.get(3, 3), Some(256));
    assert_eq!(board.max_tile(), 256);
    assert_eq!(board.tile_sum(), 510);
}

#[test]
fn test_board_empty_cells() {
    let board = Board::from_rows(&[vec![2, 0], vec![0, 4]]);
    assert_eq!(board.empty_cells(), vec![(1, 0), (0, 1)]);
    assert!(!board.is_full());

    let board = Board::from_rows(&[vec![2, 4], vec![8, 16]]);
    assert!(board.empty_cells().is_empty());
    assert!(board.is_full());
}

#[test]
fn test_board_adjacent_pairs() {
    // Checkerboard: full, but nothing to merge.
    let board = Board::from_rows(&[
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ]);
    assert!(!board.has_adjacent_pair());

    // A horizontal pair.
    let board = Board::from_rows(&[vec![2, 2], vec![4, 8]]);
    assert!(board.has_adjacent_pair());

    // A vertical pair.
    let board = Board::from_rows(&[vec![2, 4], vec![2, 8]]);
    assert!(board.has_adjacent_pair());

    // Empty neighbors never count as a pair.
    let board = Board::from_rows(&[vec![0, 0], vec![2, 4]]);
    assert!(!board.has_adjacent_pair());
}
