//! Terminal 2048 runner (default binary).
//!
//! `G2048_MODE=tui` (default) plays in raw mode with arrow keys and a
//! framebuffer renderer; `G2048_MODE=line` prints the board as text and reads
//! typed commands (`u`/`d`/`l`/`r`, full names, arrow sequences, `q`).
//! See [`tui_2048::config`] for the other variables.

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::Env;
use log::info;

use tui_2048::config::{GameConfig, Mode};
use tui_2048::core::{rng, Grid};
use tui_2048::input::handle_key_event;
use tui_2048::session::run_lines;
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::Command;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = GameConfig::from_env();
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => rng::seeded(seed),
        None => rng::from_entropy(),
    };
    let mut grid = Grid::new(config.rows, config.cols, rng);
    info!(
        "starting {}x{} game in {:?} mode",
        config.rows, config.cols, config.mode
    );

    match config.mode {
        Mode::Line => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let status = run_lines(&mut grid, stdin.lock(), &mut stdout)?;
            info!("session ended: {:?}, score {}", status, grid.score());
            Ok(())
        }
        Mode::Tui => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &mut grid);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, grid: &mut Grid) -> Result<()> {
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = grid.snapshot();
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match handle_key_event(key) {
                Some(Command::Quit) => return Ok(()),
                // Once the game is over the board is frozen; only quit is accepted.
                Some(Command::Move(direction)) if snap.playable() => {
                    grid.step(direction);
                }
                _ => {}
            },
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
