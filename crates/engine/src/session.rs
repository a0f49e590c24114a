//! Session - the host side of a game.
//!
//! A [`Session`] owns a [`BoardEngine`] and listens to its state changes the
//! way a UI would: after every change it checks the best score, tells the host
//! once that the game was won, and tells it when the game is lost. The best
//! score is kept in memory only; hosts seed it and read it back.

use std::sync::mpsc::{self, Receiver};

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::core::{BoardEngine, ChannelListener, GameSnapshot, SimpleRng, StateChange, TileRng};
use crate::types::{ConfigError, Direction, GameAction, GameConfig};

/// Something the host should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The score passed the previous best
    NewBest(u64),
    /// First winning tile of this game (sent once per game)
    Won,
    /// No move is left
    Lost,
    /// A new game replaced the old one
    Restarted,
}

/// Events produced by one call
pub type SessionEvents = ArrayVec<SessionEvent, 4>;

pub struct Session<R = SimpleRng> {
    engine: BoardEngine<R>,
    changes: Receiver<StateChange>,
    best: u64,
    won_announced: bool,
    loss_announced: bool,
    /// Events from the opening deal, held until the host asks for them
    start_events: SessionEvents,
}

impl Session<SimpleRng> {
    /// Start a game seeded with `seed`, remembering `best` as the score to beat
    pub fn new(config: GameConfig, seed: u32, best: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, SimpleRng::new(seed), best)
    }
}

impl<R: TileRng> Session<R> {
    pub fn with_rng(config: GameConfig, rng: R, best: u64) -> Result<Self, ConfigError> {
        let mut engine = BoardEngine::new(config, rng)?;
        let (tx, changes) = mpsc::channel();
        engine.set_listener(Box::new(ChannelListener::new(tx)));

        let mut session = Self {
            engine,
            changes,
            best,
            won_announced: false,
            loss_announced: false,
            start_events: SessionEvents::new(),
        };
        session.engine.start();
        let mut events = SessionEvents::new();
        session.drain_changes(&mut events);
        session.start_events = events;
        Ok(session)
    }

    /// Events raised by the first game's opening tiles
    ///
    /// A small win value or a crowded board can win or lose before the first
    /// move. Later calls return an empty list.
    pub fn take_start_events(&mut self) -> SessionEvents {
        std::mem::take(&mut self.start_events)
    }

    /// Apply an action and report what the host should know about
    pub fn apply(&mut self, action: GameAction) -> SessionEvents {
        match action {
            GameAction::Move(dir) => self.apply_move(dir),
            GameAction::Restart => self.restart(),
        }
    }

    pub fn apply_move(&mut self, dir: Direction) -> SessionEvents {
        let mut events = SessionEvents::new();
        self.engine.apply_move(dir);
        self.drain_changes(&mut events);
        events
    }

    /// Record the best score, then start a new game
    pub fn restart(&mut self) -> SessionEvents {
        let mut events = SessionEvents::new();
        self.check_best(self.engine.score(), &mut events);
        self.won_announced = false;
        self.loss_announced = false;
        self.engine.restart();
        push(&mut events, SessionEvent::Restarted);
        self.drain_changes(&mut events);
        events
    }

    fn drain_changes(&mut self, events: &mut SessionEvents) {
        while let Ok(change) = self.changes.try_recv() {
            self.on_state_changed(&change, events);
        }
    }

    fn on_state_changed(&mut self, change: &StateChange, events: &mut SessionEvents) {
        self.check_best(change.score, events);

        if change.won && !self.won_announced {
            self.won_announced = true;
            info!("episode {} won with score {}", change.episode_id, change.score);
            push(events, SessionEvent::Won);
        }

        if change.lost && !self.loss_announced {
            self.loss_announced = true;
            debug!("episode {} lost with score {}", change.episode_id, change.score);
            push(events, SessionEvent::Lost);
        }
    }

    fn check_best(&mut self, score: u64, events: &mut SessionEvents) {
        if score > self.best {
            self.best = score;
            info!("new best score {}", score);
            push(events, SessionEvent::NewBest(score));
        }
    }

    pub fn best_score(&self) -> u64 {
        self.best
    }

    pub fn score(&self) -> u64 {
        self.engine.score()
    }

    pub fn engine(&self) -> &BoardEngine<R> {
        &self.engine
    }

    /// Snapshot with the session's best score filled in
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = self.engine.snapshot();
        snap.best = self.best;
        snap
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
        out.best = self.best;
    }
}

fn push(events: &mut SessionEvents, event: SessionEvent) {
    // Capacity covers every event one call can produce.
    let _ = events.try_push(event);
}
