//! Board tests - storage, accessors and adjacency queries

use tui_2048::core::Board;
use tui_2048::types::{Position, DEFAULT_COLS, DEFAULT_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new(DEFAULT_ROWS, DEFAULT_COLS);
    assert_eq!(board.rows(), 4);
    assert_eq!(board.cols(), 4);

    // All cells should be empty
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let pos = Position::new(row, col);
            assert!(board.is_empty_at(pos), "Cell ({}, {}) should be empty", row, col);
            assert_eq!(board.value(pos), 0);
        }
    }
    assert_eq!(board.empty_count(), 16);
    assert_eq!(board.max_exponent(), 0);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(3, 5);

    board.set(Position::new(2, 4), 3);
    assert_eq!(board.get(Position::new(2, 4)), 3);
    assert_eq!(board.value(Position::new(2, 4)), 8);

    board.set(Position::new(0, 0), 11);
    assert_eq!(board.value(Position::new(0, 0)), 2048);
    assert_eq!(board.max_exponent(), 11);

    // Clear a cell
    board.set(Position::new(2, 4), 0);
    assert!(board.is_empty_at(Position::new(2, 4)));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(2, 2);
    board.set(Position::new(0, 2), 1);
}

#[test]
fn test_board_is_full() {
    let mut board = Board::from_values(&[vec![2, 4], vec![8, 0]]).unwrap();
    assert!(!board.is_full());

    board.set(Position::new(1, 1), 5);
    assert!(board.is_full());
    assert_eq!(board.empty_count(), 0);
    assert_eq!(board.empty_positions().count(), 0);
}

#[test]
fn test_board_total_value() {
    let board = Board::from_values(&[vec![2, 4, 0], vec![0, 8, 2048]]).unwrap();
    assert_eq!(board.total_value(), 2 + 4 + 8 + 2048);
}

#[test]
fn test_board_from_exponents() {
    let board = Board::from_exponents(2, 2, vec![1, 0, 0, 2]).unwrap();
    assert_eq!(board.to_values(), vec![vec![2, 0], vec![0, 4]]);

    assert!(Board::from_exponents(2, 2, vec![1, 2, 3]).is_none());
    assert!(Board::from_exponents(0, 2, vec![]).is_none());
    assert!(Board::from_exponents(1, 2, vec![64, 0]).is_none());
}

#[test]
fn test_board_adjacency_ignores_diagonals() {
    let board = Board::from_values(&[vec![2, 4], vec![4, 2]]).unwrap();
    assert!(!board.has_adjacent_pair());

    let board = Board::from_values(&[vec![2, 4, 8], vec![16, 32, 8]]).unwrap();
    assert!(board.has_adjacent_pair());
}
