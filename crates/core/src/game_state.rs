//! Game state module - the board engine
//!
//! [`BoardEngine`] owns one board and its derived score, win and loss state.
//! All mutation goes through [`BoardEngine::start`]/[`BoardEngine::restart`],
//! [`BoardEngine::resume`] and [`BoardEngine::apply_move`]; each accepted
//! mutation notifies the registered [`StateListener`] exactly once.
//!
//! The engine is single-owner and synchronous. Hosts that share it across
//! threads must serialize calls themselves.

use std::fmt;

use log::{debug, info, trace};

use crate::board::Board;
use crate::line::{line_can_slide, slide_line};
use crate::observer::{StateChange, StateListener};
use crate::rng::{roll_spawn, SimpleRng, TileRng};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Coarse lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Constructed, `start()` not called yet
    NotStarted,
    Playing,
    /// A winning tile has appeared; moves are still accepted
    Won,
    /// No move can change the board
    Lost,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::NotStarted => "not_started",
            GamePhase::Playing => "playing",
            GamePhase::Won => "won",
            GamePhase::Lost => "lost",
        }
    }
}

/// What a single `apply_move` did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// False for a no-op: nothing moved, nothing spawned, nobody notified
    pub changed: bool,
    pub merges: u32,
    pub score_gained: u64,
    /// (row, col, value) of the tile spawned after the move
    pub spawned: Option<(usize, usize, u32)>,
}

/// Deterministic 2048 board engine
pub struct BoardEngine<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    rng: R,
    score: u64,
    won: bool,
    lost: bool,
    started: bool,
    /// Accepted (board-changing) moves in the current episode.
    moves: u32,
    /// Monotonic episode id (increments on start/restart/resume).
    episode_id: u32,
    listener: Option<Box<dyn StateListener>>,
}

impl BoardEngine<SimpleRng> {
    /// Classic 4x4 game to 2048 seeded with `seed`
    pub fn classic(seed: u32) -> Self {
        Self::build(GameConfig::default(), SimpleRng::new(seed))
    }

    /// Engine with a [`SimpleRng`] seeded from `seed`
    pub fn with_seed(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl<R: TileRng> BoardEngine<R> {
    /// Create an engine with an empty board
    ///
    /// Call [`BoardEngine::start`] to place the initial tiles.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: GameConfig, rng: R) -> Self {
        Self {
            board: Board::new(config.size),
            config,
            rng,
            score: 0,
            won: false,
            lost: false,
            started: false,
            moves: 0,
            episode_id: 0,
            listener: None,
        }
    }

    /// Register the listener notified after every accepted mutation
    pub fn set_listener(&mut self, listener: Box<dyn StateListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Start a new game: clear the board, reset score and flags, spawn the
    /// initial tiles, notify once. Calling it again restarts.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.won = false;
        self.lost = false;
        self.moves = 0;
        self.started = true;
        self.episode_id = self.episode_id.wrapping_add(1);

        for _ in 0..self.config.initial_tiles {
            self.spawn_tile();
        }
        self.update_flags();

        debug!(
            "episode {} started on {}x{} board (win at {})",
            self.episode_id, self.config.size, self.config.size, self.config.win_value
        );
        self.notify();
    }

    /// Discard all state and start over; same as [`BoardEngine::start`]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Continue from an existing position
    ///
    /// The board must match the configured size. Win and loss are derived
    /// from the board; the move counter restarts at 0.
    pub fn resume(&mut self, board: Board, score: u64) -> Result<(), ConfigError> {
        if board.size() != self.config.size {
            return Err(ConfigError::BoardSize(board.size()));
        }
        self.board = board;
        self.score = score;
        self.won = false;
        self.lost = false;
        self.moves = 0;
        self.started = true;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.update_flags();

        debug!("episode {} resumed with score {}", self.episode_id, score);
        self.notify();
        Ok(())
    }

    /// Slide and merge every tile toward `dir`
    ///
    /// When anything changed: the merged values are added to the score, one
    /// tile is spawned, win/loss are recomputed and the listener is notified.
    /// Otherwise the call is a silent no-op (also before `start()` and after
    /// a loss).
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        if !self.started || self.lost {
            trace!("move {} ignored in phase {}", dir.as_str(), self.phase().as_str());
            return MoveOutcome::default();
        }

        let mut outcome = MoveOutcome::default();
        let n = self.board.size() as usize;
        for idx in 0..n {
            let result = slide_line(&self.board.line(dir, idx));
            if result.changed {
                self.board.set_line(dir, idx, &result.cells);
                outcome.changed = true;
                outcome.merges += result.merges;
                outcome.score_gained += result.score;
            }
        }

        if !outcome.changed {
            trace!("move {} is a no-op", dir.as_str());
            return outcome;
        }

        self.score += outcome.score_gained;
        self.moves += 1;
        outcome.spawned = self.spawn_tile();
        self.update_flags();

        trace!(
            "move {} merged {} (+{}), spawned {:?}, score {}",
            dir.as_str(),
            outcome.merges,
            outcome.score_gained,
            outcome.spawned,
            self.score
        );
        self.notify();
        outcome
    }

    /// Move by numeric direction (0=up, 1=down, 2=left, 3=right)
    ///
    /// Out-of-range values are rejected without touching the game.
    pub fn try_apply_move(&mut self, dir: u8) -> Result<MoveOutcome, InvalidDirection> {
        let dir = Direction::try_from(dir)?;
        Ok(self.apply_move(dir))
    }

    /// Apply a game action
    /// Returns true if the game state changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.apply_move(dir).changed,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Would a move toward `dir` change the board?
    pub fn can_move(&self, dir: Direction) -> bool {
        let n = self.board.size() as usize;
        (0..n).any(|idx| line_can_slide(&self.board.line(dir, idx)))
    }

    /// Would any move change the board?
    pub fn has_any_move(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_move(dir))
    }

    fn spawn_tile(&mut self) -> Option<(usize, usize, u32)> {
        let (nth, value) = roll_spawn(
            &mut self.rng,
            self.board.empty_count(),
            self.config.four_chance_percent,
        )?;
        let (row, col) = self.board.nth_empty(nth)?;
        self.board.set(row, col, Some(value));
        Some((row, col, value))
    }

    fn update_flags(&mut self) {
        if !self.won && self.board.max_tile() >= self.config.win_value {
            self.won = true;
            info!(
                "episode {} reached {} after {} moves",
                self.episode_id, self.config.win_value, self.moves
            );
        }
        // A full board can only change through a merge.
        let lost = self.board.is_full() && !self.board.has_adjacent_pair();
        if lost && !self.lost {
            debug!(
                "episode {} lost with score {} after {} moves",
                self.episode_id, self.score, self.moves
            );
        }
        self.lost = lost;
    }

    fn notify(&mut self) {
        let change = self.state_change();
        if let Some(listener) = self.listener.as_mut() {
            listener.state_changed(&change);
        }
    }

    pub fn state_change(&self) -> StateChange {
        StateChange {
            score: self.score,
            won: self.won,
            lost: self.lost,
            episode_id: self.episode_id,
            moves: self.moves,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// True once a winning tile appeared; sticky until restart
    pub fn is_win(&self) -> bool {
        self.won
    }

    /// True when the board is full and no move changes it
    pub fn is_loss(&self) -> bool {
        self.lost
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> GamePhase {
        if !self.started {
            GamePhase::NotStarted
        } else if self.lost {
            GamePhase::Lost
        } else if self.won {
            GamePhase::Won
        } else {
            GamePhase::Playing
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let n = self.board.size() as usize;
        out.size = self.board.size();
        out.cells = [0; MAX_CELLS];
        for (dst, cell) in out.cells.iter_mut().zip(self.board.cells()).take(n * n) {
            *dst = cell.unwrap_or(0);
        }
        out.score = self.score;
        out.won = self.won;
        out.lost = self.lost;
        out.phase = self.phase();
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.max_tile = self.board.max_tile();
        out.win_value = self.config.win_value;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl<R: fmt::Debug> fmt::Debug for BoardEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardEngine")
            .field("config", &self.config)
            .field("board", &self.board)
            .field("rng", &self.rng)
            .field("score", &self.score)
            .field("won", &self.won)
            .field("lost", &self.lost)
            .field("started", &self.started)
            .field("moves", &self.moves)
            .field("episode_id", &self.episode_id)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Always picks the first empty cell and (with four chance 0) a 2.
    struct FirstCell;

    impl TileRng for FirstCell {
        fn next_u32(&mut self) -> u32 {
            0
        }
    }

    fn engine_with(rows: &[&[u32]], score: u64) -> BoardEngine<FirstCell> {
        let config = GameConfig::default()
            .with_size(rows.len() as u8)
            .with_four_chance_percent(0);
        let mut engine = BoardEngine::new(config, FirstCell).unwrap();
        engine
            .resume(Board::from_rows(rows).unwrap(), score)
            .unwrap();
        engine
    }

    fn record(engine: &mut BoardEngine<FirstCell>) -> Rc<RefCell<Vec<StateChange>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        engine.set_listener(Box::new(move |c: &StateChange| sink.borrow_mut().push(*c)));
        seen
    }

    #[test]
    fn test_new_engine_is_empty_and_not_started() {
        let engine = BoardEngine::classic(1);
        assert_eq!(engine.phase(), GamePhase::NotStarted);
        assert_eq!(engine.board().occupied_count(), 0);
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig::default().with_size(12);
        assert_eq!(
            BoardEngine::with_seed(config, 1).err(),
            Some(ConfigError::BoardSize(12))
        );
    }

    #[test]
    fn test_start_spawns_two_tiles_and_notifies_once() {
        let mut engine = BoardEngine::classic(42);
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        engine.set_listener(Box::new(move |_: &StateChange| *sink.borrow_mut() += 1));

        engine.start();
        assert_eq!(engine.board().occupied_count(), 2);
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(*seen.borrow(), 1);
        for cell in engine.board().cells().iter().flatten() {
            assert!(*cell == 2 || *cell == 4);
        }
    }

    #[test]
    fn test_move_before_start_is_noop() {
        let mut engine = BoardEngine::classic(1);
        assert_eq!(engine.apply_move(Direction::Left), MoveOutcome::default());
        assert_eq!(engine.board().occupied_count(), 0);
    }

    #[test]
    fn test_move_merges_scores_and_spawns() {
        let mut engine = engine_with(
            &[&[2, 2, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]],
            0,
        );
        let seen = record(&mut engine);

        let outcome = engine.apply_move(Direction::Left);
        assert!(outcome.changed);
        assert_eq!(outcome.merges, 1);
        assert_eq!(outcome.score_gained, 4);
        // First empty cell after the merge is (0, 1).
        assert_eq!(outcome.spawned, Some((0, 1, 2)));
        assert_eq!(engine.score(), 4);
        assert_eq!(engine.moves(), 1);
        assert_eq!(engine.board().value(0, 0), 4);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].score, 4);
    }

    #[test]
    fn test_noop_move_is_silent() {
        let mut engine = engine_with(
            &[&[2, 4, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]],
            10,
        );
        let seen = record(&mut engine);
        let before = engine.board().clone();

        let outcome = engine.apply_move(Direction::Left);
        assert!(!outcome.changed);
        assert_eq!(engine.board(), &before);
        assert_eq!(engine.score(), 10);
        assert_eq!(engine.moves(), 0);
        assert!(seen.borrow().is_empty());
        assert!(!engine.can_move(Direction::Left));
        assert!(!engine.can_move(Direction::Up));
        assert!(engine.can_move(Direction::Right));
    }

    #[test]
    fn test_each_direction_moves_the_right_way() {
        let rows: &[&[u32]] = &[&[0, 0, 0, 0], &[0, 8, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]];
        let cases = [
            (Direction::Up, (0, 1)),
            (Direction::Down, (3, 1)),
            (Direction::Left, (1, 0)),
            (Direction::Right, (1, 3)),
        ];
        for (dir, (row, col)) in cases {
            let mut engine = engine_with(rows, 0);
            assert!(engine.apply_move(dir).changed);
            assert_eq!(engine.board().value(row, col), 8, "direction {:?}", dir);
        }
    }

    #[test]
    fn test_down_merges_from_the_bottom() {
        let mut engine = engine_with(
            &[&[2, 0, 0, 0], &[2, 0, 0, 0], &[2, 0, 0, 0], &[0, 0, 0, 0]],
            0,
        );
        engine.apply_move(Direction::Down);
        assert_eq!(engine.board().value(3, 0), 4);
        assert_eq!(engine.board().value(2, 0), 2);
    }

    #[test]
    fn test_win_is_sticky() {
        let config = GameConfig::default()
            .with_win_value(16)
            .with_four_chance_percent(0);
        let mut engine = BoardEngine::new(config, FirstCell).unwrap();
        engine
            .resume(
                Board::from_rows(&[&[8, 8, 0, 0], &[0; 4], &[0; 4], &[0; 4]]).unwrap(),
                0,
            )
            .unwrap();
        assert!(!engine.is_win());

        engine.apply_move(Direction::Left);
        assert!(engine.is_win());
        assert_eq!(engine.phase(), GamePhase::Won);

        engine.apply_move(Direction::Right);
        engine.apply_move(Direction::Down);
        assert!(engine.is_win());
    }

    #[test]
    fn test_loss_blocks_further_moves() {
        let mut engine = engine_with(&[&[2, 4], &[4, 2]], 30);
        assert!(engine.is_loss());
        assert_eq!(engine.phase(), GamePhase::Lost);

        let seen = record(&mut engine);
        for dir in Direction::ALL {
            assert!(!engine.apply_move(dir).changed);
        }
        assert_eq!(engine.score(), 30);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_move_into_loss() {
        // Left merges nothing in row 1 but slides row 0; the spawn fills the
        // last gap and leaves no pairs.
        let mut engine = engine_with(&[&[0, 4], &[8, 16]], 0);
        assert!(!engine.is_loss());
        let outcome = engine.apply_move(Direction::Left);
        assert_eq!(outcome.spawned, Some((0, 1, 2)));
        assert!(engine.is_loss());
    }

    #[test]
    fn test_try_apply_move_rejects_unknown_values() {
        let mut engine = BoardEngine::classic(3);
        engine.start();
        let before = engine.snapshot();
        assert_eq!(engine.try_apply_move(4), Err(InvalidDirection(4)));
        assert_eq!(engine.snapshot(), before);
        assert!(engine.try_apply_move(2).is_ok());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut engine = engine_with(&[&[2, 4], &[4, 2]], 120);
        let episode = engine.episode_id();
        assert!(engine.apply_action(GameAction::Restart));
        assert_eq!(engine.score(), 0);
        assert!(!engine.is_win());
        assert!(!engine.is_loss());
        assert_eq!(engine.board().occupied_count(), 2);
        assert_eq!(engine.episode_id(), episode + 1);
    }

    #[test]
    fn test_resume_rejects_wrong_size() {
        let mut engine = BoardEngine::classic(1);
        assert_eq!(
            engine.resume(Board::new(3), 0),
            Err(ConfigError::BoardSize(3))
        );
        assert!(!engine.started());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let engine = engine_with(&[&[2, 0, 0], &[0, 4, 0], &[0, 0, 8]], 12);
        let snap = engine.snapshot();
        assert_eq!(snap.size, 3);
        assert_eq!(snap.value(0, 0), 2);
        assert_eq!(snap.value(1, 1), 4);
        assert_eq!(snap.value(2, 2), 8);
        assert_eq!(snap.value(3, 3), 0);
        assert_eq!(snap.score, 12);
        assert_eq!(snap.max_tile, 8);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert!(snap.playable());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = BoardEngine::classic(777);
        let mut b = BoardEngine::classic(777);
        a.start();
        b.start();
        for i in 0..200 {
            let dir = Direction::ALL[i % 4];
            assert_eq!(a.apply_move(dir), b.apply_move(dir));
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }
}
