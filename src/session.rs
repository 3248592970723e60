//! Line-oriented game session.
//!
//! Prints the score and the board as text, then reads whitespace-separated
//! command tokens until one of them changes the board. Works with any
//! `BufRead`/`Write` pair so it can be driven from stdin/stdout or from tests.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use crate::core::Grid;
use crate::input::parse_command;
use crate::term::render_text;
use crate::types::{Command, GameStatus};

const SEPARATOR: &str = "===========================================";

/// Whitespace-delimited tokens pulled lazily from a reader.
struct Tokens<I> {
    input: I,
    pending: VecDeque<String>,
}

impl<I: BufRead> Tokens<I> {
    fn new(input: I) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("read command from input")?;
            if read == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Play on `grid` until the game is won or lost, the user quits, or input ends.
///
/// Returns the grid status at exit ([`GameStatus::Playing`] after a quit or EOF).
pub fn run_lines<R, I, O>(grid: &mut Grid<R>, input: I, output: &mut O) -> Result<GameStatus>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut tokens = Tokens::new(input);

    loop {
        draw(grid, output)?;

        match grid.status() {
            GameStatus::Won => {
                writeln!(output, "Congratulations! You won!")?;
                info!("game won with score {}", grid.score());
                return Ok(GameStatus::Won);
            }
            GameStatus::Lost => {
                writeln!(output, "You lose")?;
                info!("game lost with score {}", grid.score());
                return Ok(GameStatus::Lost);
            }
            GameStatus::Playing => {}
        }

        // Keep prompting until a command actually moves something.
        loop {
            write!(output, "Command: ")?;
            output.flush().context("flush prompt")?;

            let Some(token) = tokens.next_token()? else {
                writeln!(output)?;
                return Ok(grid.status());
            };

            match parse_command(&token) {
                Some(Command::Quit) => return Ok(grid.status()),
                Some(Command::Move(direction)) => {
                    if grid.step(direction).changed {
                        break;
                    }
                }
                None => writeln!(output, "Invalid command")?,
            }
        }
    }
}

fn draw<R: Rng, O: Write>(grid: &Grid<R>, output: &mut O) -> Result<()> {
    writeln!(output, "{}", SEPARATOR)?;
    writeln!(output, "Score: {}", grid.score())?;
    writeln!(output)?;
    writeln!(output, "{}", render_text(&grid.snapshot()))?;
    writeln!(output, "{}", SEPARATOR)?;
    Ok(())
}
