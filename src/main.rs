//! Terminal falling-block puzzle (default binary).
//!
//! Single-threaded loop: render a frame, wait for a key or the next descent
//! tick, then drain the event queue through the game controller.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, warn, LevelFilter};

use tui_blockfall::config::Config;
use tui_blockfall::core::{EventQueue, Game, GameEvent, GameSnapshot};
use tui_blockfall::input::{is_press, key_action, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll timeout while no descent timer is armed (splash screen).
const IDLE_FRAME_MS: u32 = 250;

/// How long the game-over frame stays up unless a key is pressed.
const GAME_OVER_HOLD: Duration = Duration::from_millis(1500);

const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;
    for note in &config.rejected {
        warn!("ignoring config value: {note}");
    }
    info!("seed {}", config.seed);

    let mut game = Game::new(config.seed);
    let view = GameView::new(config.cell_width, 1);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, view);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    let score = game.score();
    info!(
        "final score {} (level {}, lines {})",
        score.counter(),
        score.level(),
        game.lines()
    );
    println!(
        "Score: {:08}  Level: {}  Lines: {}",
        score.counter(),
        score.level(),
        game.lines()
    );
    Ok(())
}

/// Logs go to `TETRIS_LOG_PATH` when set; otherwise only `RUST_LOG` enables
/// them, since stderr shares the terminal with the game.
fn init_logging(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    let explicit = std::env::var_os("RUST_LOG").is_some();

    match &config.log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            if !explicit {
                builder.filter_level(LevelFilter::Debug);
            }
        }
        None if !explicit => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {}
    }

    builder.try_init().context("initialising logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game, view: GameView) -> Result<()> {
    let mut queue = EventQueue::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        draw(term, game, view, &mut snap, &mut fb)?;

        let timeout = queue.until_next_tick_ms().unwrap_or(IDLE_FRAME_MS);
        if event::poll(Duration::from_millis(timeout as u64))? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        queue.push(GameEvent::Quit);
                    } else {
                        queue.push(GameEvent::Input(key_action(key)));
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;
        queue.advance(elapsed);

        while let Some(event) = queue.pop() {
            if game.handle_event(event).is_break() {
                if game.is_over() {
                    draw(term, game, view, &mut snap, &mut fb)?;
                    hold_game_over()?;
                }
                return Ok(());
            }
        }

        if !queue.is_armed() {
            if let Some(interval) = game.drop_interval_ms() {
                queue.arm(interval);
            }
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    game: &Game,
    view: GameView,
    snap: &mut GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    game.snapshot_into(snap);
    let viewport = term.viewport().unwrap_or(FALLBACK_VIEWPORT);
    view.render_into(snap, viewport, fb);
    term.draw_swap(fb)
}

/// Keep the final frame visible for a moment; any key dismisses it.
fn hold_game_over() -> Result<()> {
    let deadline = Instant::now() + GAME_OVER_HOLD;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || !event::poll(remaining)? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if is_press(&key) {
                return Ok(());
            }
        }
    }
}
