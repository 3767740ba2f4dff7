//! Terminal Flappy runner (default binary).
//!
//! This is the gameplay entrypoint. It uses crossterm for input and the
//! framebuffer renderer from `tui_flappy::term`, and drives the core on a
//! fixed 16ms tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_flappy::cli::{parse_args, USAGE};
use tui_flappy::core::GameState;
use tui_flappy::input::{handle_key_event, should_quit};
use tui_flappy::logging;
use tui_flappy::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_flappy::types::TICK_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    logging::init_from_env()?;
    let seed = opts.seed.unwrap_or_else(rand::random);
    info!(seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<()> {
    let mut game = GameState::new(seed);
    let mut view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), best = game.best_score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }
    }
}
