//! Command mapping from terminal events and typed text.

use crate::types::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    let direction = match key.code {
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Direction::Up,
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Direction::Down,
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Direction::Left,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Direction::Right,
        _ => return None,
    };
    Some(Command::Move(direction))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Parse one typed command token.
///
/// Accepts direction names, their first letters and the raw ANSI arrow-key
/// sequences a cooked-mode terminal echoes (`ESC [ A` .. `ESC [ D`), plus
/// `q` / `quit`. Matching ignores case and surrounding whitespace.
///
/// Note that `d` means *down* here, unlike the `wasd` key layout of
/// [`handle_key_event`].
pub fn parse_command(input: &str) -> Option<Command> {
    let token = input.trim();
    match token {
        "\x1B[A" => return Some(Command::Move(Direction::Up)),
        "\x1B[B" => return Some(Command::Move(Direction::Down)),
        "\x1B[C" => return Some(Command::Move(Direction::Right)),
        "\x1B[D" => return Some(Command::Move(Direction::Left)),
        _ => {}
    }

    match token.to_lowercase().as_str() {
        "q" | "quit" => Some(Command::Quit),
        other => Direction::from_str(other).map(Command::Move),
    }
}
