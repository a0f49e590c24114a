//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the board, the per-line slide/merge,
//! tile spawning and the engine that ties them together. It has **zero
//! dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Randomness is injected through [`TileRng`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Fixed-capacity storage, no allocation on the move path
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with oriented line access
//! - [`line`]: Slide and merge of a single row or column
//! - [`rng`]: Seedable tile spawn randomness
//! - [`game_state`]: [`BoardEngine`] - moves, score, win/loss, notifications
//! - [`observer`]: Listener interface for state changes
//! - [`snapshot`]: Copyable view for renderers
//!
//! # Game Rules
//!
//! - **Moves**: Up, Down, Left, Right slide every tile as far as it goes
//! - **Merges**: Two equal neighbours merge into their sum, once per tile per move
//! - **Score**: Every merge adds the merged value
//! - **Spawns**: Each changing move adds one tile (2, or 4 with 10% chance)
//! - **Win**: A tile reaches the win value (2048); play may continue
//! - **Loss**: Board full and no move changes it
//!
//! # Example
//!
//! ```
//! use tui_2048_core::BoardEngine;
//! use tui_2048_types::Direction;
//!
//! // Create and start a game
//! let mut game = BoardEngine::classic(12345);
//! game.start();
//! assert_eq!(game.board().occupied_count(), 2);
//!
//! // Apply moves; a move that changes nothing is a no-op
//! for dir in Direction::ALL {
//!     let outcome = game.apply_move(dir);
//!     if outcome.changed {
//!         assert!(outcome.spawned.is_some());
//!     }
//! }
//!
//! // Check game state
//! assert!(!game.is_loss());
//! ```

pub mod board;
pub mod game_state;
pub mod line;
pub mod observer;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Line};
pub use game_state::{BoardEngine, GamePhase, MoveOutcome};
pub use line::{line_can_slide, slide_line, LineResult};
pub use observer::{ChannelListener, StateChange, StateListener};
pub use rng::{roll_spawn, SimpleRng, TileRng};
pub use snapshot::GameSnapshot;
