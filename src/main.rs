//! Terminal typing game runner (default binary).
//!
//! Words fall one row per tick; type them to destroy them before they reach
//! the floor. Input is read with crossterm and frames are drawn through the
//! framebuffer renderer in `typefall::term`.

mod cli;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{event, terminal};
use log::{info, trace};

use typefall::core::{Dictionary, GameSnapshot, GameState};
use typefall::input::map_event;
use typefall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport, FRAME_HEIGHT};
use typefall::types::{Control, GameEvent, GRID_WIDTH};

use cli::Args;

fn main() -> Result<()> {
    let config = Args::parse().into_config();
    cli::init_logging(config.log_file.as_deref())?;

    let dictionary = Dictionary::load(&config.dictionary, config.max_word_len)
        .with_context(|| format!("failed to load dictionary {}", config.dictionary.display()))?;
    info!("seed {}", config.seed);
    let game = GameState::new(dictionary, config.seed);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, game, config.tick));

    // Always try to restore terminal state.
    let restored = term.exit();
    result?;
    restored
}

fn run(term: &mut TerminalRenderer, mut game: GameState, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let (w, h) = terminal::size().unwrap_or((GRID_WIDTH, FRAME_HEIGHT));
    let mut viewport = Viewport::new(w, h);
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(w, h);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Some(ev) = map_event(event::read()?, game.phase()) {
                let control = game.handle_event(ev);
                if ev.is_keystroke() {
                    trace!("input {:?}", game.input());
                }
                match control {
                    Control::Continue => {}
                    Control::Redraw => term.invalidate(),
                    Control::Resize { width, height } => {
                        viewport = Viewport::new(width, height);
                        term.invalidate();
                    }
                    Control::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.handle_event(GameEvent::Tick);
        }
    }

    info!(
        "quit while {}: score {} level {} words {}",
        game.phase().as_str(),
        game.score(),
        game.level(),
        game.words_typed()
    );
    Ok(())
}
