//! Line session tests - drive the typed-command loop with in-memory I/O

use std::io::Cursor;

use tui_2048::core::{rng, Board, Grid};
use tui_2048::session::run_lines;
use tui_2048::types::GameStatus;

fn grid_from(values: &[Vec<u64>]) -> Grid {
    Grid::from_board(Board::from_values(values).unwrap(), rng::seeded(1))
}

fn play(grid: &mut Grid, input: &str) -> (GameStatus, String) {
    let mut out = Vec::new();
    let status = run_lines(grid, Cursor::new(input.as_bytes().to_vec()), &mut out).unwrap();
    (status, String::from_utf8(out).unwrap())
}

#[test]
fn quit_ends_session_without_moving() {
    let mut grid = Grid::seeded(4, 4, 11);
    let before = grid.board().clone();

    let (status, out) = play(&mut grid, "q\n");
    assert_eq!(status, GameStatus::Playing);
    assert_eq!(grid.board(), &before);
    assert!(out.contains("Score: 0"));
    assert!(out.contains("Command: "));
}

#[test]
fn invalid_command_reprompts_without_mutation() {
    let mut grid = Grid::seeded(4, 4, 12);
    let before = grid.board().clone();

    let (_, out) = play(&mut grid, "jump sideways\nquit\n");
    assert_eq!(out.matches("Invalid command").count(), 2);
    assert_eq!(out.matches("Command: ").count(), 3);
    assert_eq!(grid.board(), &before);
}

#[test]
fn noop_move_reprompts_without_redraw() {
    let mut grid = grid_from(&[vec![2, 0], vec![4, 0]]);
    let (_, out) = play(&mut grid, "l q");
    // One board draw, two prompts.
    assert_eq!(out.matches("Score:").count(), 1);
    assert_eq!(out.matches("Command: ").count(), 2);
    assert_eq!(grid.board().empty_count(), 2);
}

#[test]
fn move_redraws_and_spawns() {
    let mut grid = grid_from(&[vec![2, 2], vec![0, 0]]);
    let (_, out) = play(&mut grid, "left\nq\n");
    assert_eq!(out.matches("Score:").count(), 2);
    assert!(out.contains("Score: 4"));
    assert_eq!(grid.value(0, 0), 4);
    // The merge freed a cell and a new tile was spawned into the board.
    assert_eq!(grid.board().empty_count(), 2);
}

#[test]
fn arrow_sequences_are_commands() {
    let mut grid = grid_from(&[vec![2, 0], vec![0, 0]]);
    let (_, out) = play(&mut grid, "\x1B[B\nq\n");
    assert!(!out.contains("Invalid command"));
    assert_eq!(grid.value(1, 0), 2);
}

#[test]
fn win_is_announced_before_prompting() {
    let mut grid = grid_from(&[vec![1024, 1024], vec![0, 0]]);
    let (status, out) = play(&mut grid, "r\n");
    assert_eq!(status, GameStatus::Won);
    assert!(out.contains("Congratulations! You won!"));
    assert!(out.contains("2048"));
}

#[test]
fn loss_is_announced_immediately() {
    let mut grid = grid_from(&[vec![2, 4], vec![4, 2]]);
    let (status, out) = play(&mut grid, "");
    assert_eq!(status, GameStatus::Lost);
    assert!(out.contains("You lose"));
    assert!(!out.contains("Command: "));
}

#[test]
fn end_of_input_stops_the_session() {
    let mut grid = Grid::seeded(3, 3, 5);
    let (status, out) = play(&mut grid, "");
    assert_eq!(status, GameStatus::Playing);
    assert_eq!(out.matches("Command: ").count(), 1);
}
