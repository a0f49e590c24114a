//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`.
//! Moves are discrete, so the loop blocks on input instead of ticking.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::Env;
use log::{debug, info};

use tui_2048::core::GameSnapshot;
use tui_2048::engine::{Session, SessionEvent};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{
    GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_FOUR_CHANCE_PERCENT, DEFAULT_WIN_VALUE,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Cli {
    /// Seed for tile spawns (defaults to the current time)
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Board side length (2..=8)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_BOARD_SIZE)]
    size: u8,

    /// Tile value that wins the game (a power of two >= 4)
    #[arg(long, value_name = "VALUE", default_value_t = DEFAULT_WIN_VALUE)]
    win: u32,

    /// Chance in percent that a spawned tile is a 4
    #[arg(long, value_name = "PERCENT", default_value_t = DEFAULT_FOUR_CHANCE_PERCENT)]
    four_chance: u8,

    /// Best score to beat, e.g. from an earlier run
    #[arg(long, value_name = "SCORE", default_value_t = 0)]
    best: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = GameConfig::default()
        .with_size(cli.size)
        .with_win_value(cli.win)
        .with_four_chance_percent(cli.four_chance);
    let seed = cli.seed.unwrap_or_else(seed_from_time);
    info!("starting {}x{} game with seed {}", cli.size, cli.size, seed);

    // Validate before touching the terminal so errors print normally.
    let mut session = Session::new(config, seed, cli.best)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!(
        "score: {}  best: {}",
        session.score(),
        session.best_score()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    for ev in session.take_start_events() {
        log_event(ev);
    }

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    for ev in session.apply(action) {
                        log_event(ev);
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn log_event(ev: SessionEvent) {
    match ev {
        SessionEvent::NewBest(score) => debug!("new best {}", score),
        SessionEvent::Won => debug!("won"),
        SessionEvent::Lost => debug!("lost"),
        SessionEvent::Restarted => debug!("restarted"),
    }
}

fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
