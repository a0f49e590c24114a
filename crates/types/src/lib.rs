//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, so they are usable in any context
//! (core logic, terminal rendering, text command surfaces).
//!
//! # Board Dimensions
//!
//! The board is a square grid whose side length is fixed when a game engine is
//! constructed:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Classic 4x4 board |
//! | `MIN_BOARD_SIZE` | 2 | Smallest playable board |
//! | `MAX_BOARD_SIZE` | 8 | Largest board (fixed-capacity storage) |
//! | `MAX_CELLS` | 64 | `MAX_BOARD_SIZE` squared |
//!
//! # Game Rule Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIN_VALUE` | 2048 | Tile value that wins the game |
//! | `DEFAULT_FOUR_CHANCE_PERCENT` | 10 | Chance a spawned tile is a 4 instead of a 2 |
//! | `DEFAULT_INITIAL_TILES` | 2 | Tiles placed on start/restart |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameConfig, DEFAULT_BOARD_SIZE};
//!
//! // Parse a direction (case-insensitive, full names or initials)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("u"), Some(Direction::Up));
//!
//! // Numeric directions reject anything outside 0..=3
//! assert!(Direction::try_from(7u8).is_err());
//!
//! // Parse a game action
//! let action = GameAction::from_str("restart").unwrap();
//! assert_eq!(action, GameAction::Restart);
//!
//! // Default configuration is the classic game
//! let config = GameConfig::default();
//! assert_eq!(config.size, DEFAULT_BOARD_SIZE);
//! assert!(config.validate().is_ok());
//! ```

use thiserror::Error;

/// Default board side length (4x4)
pub const DEFAULT_BOARD_SIZE: u8 = 4;

/// Smallest supported board side length
pub const MIN_BOARD_SIZE: u8 = 2;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: u8 = 8;

/// Cell capacity of the largest board
pub const MAX_CELLS: usize = (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize);

/// Tile value that wins the game (2048)
pub const DEFAULT_WIN_VALUE: u32 = 2048;

/// Percentage of spawned tiles that are 4 instead of 2
pub const DEFAULT_FOUR_CHANCE_PERCENT: u8 = 10;

/// Number of tiles placed on an empty board by start/restart
pub const DEFAULT_INITIAL_TILES: u8 = 2;

/// Value of the common spawned tile
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawned tile
pub const SPAWN_HIGH_VALUE: u32 = 4;


/// The four move directions
///
/// Each direction slides every tile toward one edge of the board:
/// - **Up**: toward row 0
/// - **Down**: toward the last row
/// - **Left**: toward column 0
/// - **Right**: toward the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// All directions, in numeric order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or their initials (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("D"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("l"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A numeric direction outside `0..=3`
///
/// Only reachable through weakly-typed call surfaces; [`Direction`] itself
/// cannot hold an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid direction {0} (expected 0=up, 1=down, 2=left, 3=right)")]
pub struct InvalidDirection(pub u8);

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Down),
            2 => Ok(Direction::Left),
            3 => Ok(Direction::Right),
            other => Err(InvalidDirection(other)),
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are used by both keyboard input and text commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge all tiles in one direction
    Move(Direction),
    /// Discard the current game and start a new one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Accepts a bare direction (`"left"`), a camelCase move (`"moveLeft"`)
    /// or `"restart"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveDown"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if lower == "restart" {
            return Some(GameAction::Restart);
        }
        let dir = lower.strip_prefix("move").unwrap_or(&lower);
        Direction::from_str(dir).map(GameAction::Move)
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(value)`: Tile holding a power of two (at least 2)
pub type Cell = Option<u32>;

/// True if `value` may sit on the board as a tile
pub fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}

/// Invalid [`GameConfig`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is outside 2..=8")]
    BoardSize(u8),
    #[error("win value {0} must be a power of two of at least 4")]
    WinValue(u32),
    #[error("four-tile chance {0}% exceeds 100%")]
    FourChance(u8),
    #[error("{tiles} initial tiles do not fit a board of {cells} cells")]
    InitialTiles { tiles: u8, cells: usize },
}

/// Rules for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length
    pub size: u8,
    /// Tile value that sets the win flag
    pub win_value: u32,
    /// Percentage of spawns that produce a 4
    pub four_chance_percent: u8,
    /// Tiles placed by start/restart
    pub initial_tiles: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            win_value: DEFAULT_WIN_VALUE,
            four_chance_percent: DEFAULT_FOUR_CHANCE_PERCENT,
            initial_tiles: DEFAULT_INITIAL_TILES,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    pub fn with_win_value(mut self, win_value: u32) -> Self {
        self.win_value = win_value;
        self
    }

    pub fn with_four_chance_percent(mut self, percent: u8) -> Self {
        self.four_chance_percent = percent;
        self
    }

    pub fn with_initial_tiles(mut self, tiles: u8) -> Self {
        self.initial_tiles = tiles;
        self
    }

    /// Number of cells on a board of this size
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Check every field against the supported ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(ConfigError::BoardSize(self.size));
        }
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(ConfigError::WinValue(self.win_value));
        }
        if self.four_chance_percent > 100 {
            return Err(ConfigError::FourChance(self.four_chance_percent));
        }
        let cells = self.cell_count();
        if self.initial_tiles == 0 || self.initial_tiles as usize > cells {
            return Err(ConfigError::InitialTiles {
                tiles: self.initial_tiles,
                cells,
            });
        }
        Ok(())
    }
}
