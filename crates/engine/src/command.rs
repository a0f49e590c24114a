//! Text commands - a weakly-typed way to drive a [`Session`].
//!
//! Accepted forms (case-insensitive, surrounding whitespace ignored):
//!
//! | Input | Action |
//! |-------|--------|
//! | `up`, `u`, `moveUp` | move up (likewise down/left/right) |
//! | `move <dir>` / `m <dir>` | move, `<dir>` a name, initial, or `0..=3` |
//! | `restart`, `new` | restart |

use thiserror::Error;

use crate::core::TileRng;
use crate::session::{Session, SessionEvents};
use crate::types::{Direction, GameAction};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

impl CommandError {
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::Empty => "empty",
            CommandError::InvalidDirection(_) => "invalid_direction",
            CommandError::UnknownCommand(_) => "unknown_command",
        }
    }
}

/// Parse one command line into an action
pub fn parse_command(input: &str) -> Result<GameAction, CommandError> {
    let mut words = input.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(CommandError::Empty);
    };
    let rest = words.next();
    if words.next().is_some() {
        return Err(CommandError::UnknownCommand(input.trim().to_string()));
    }

    match (verb.to_lowercase().as_str(), rest) {
        ("move" | "m", Some(dir)) => parse_direction(dir).map(GameAction::Move),
        ("move" | "m", None) => Err(CommandError::InvalidDirection(String::new())),
        ("restart" | "new", None) => Ok(GameAction::Restart),
        (_, None) => GameAction::from_str(verb)
            .ok_or_else(|| CommandError::UnknownCommand(verb.to_string())),
        _ => Err(CommandError::UnknownCommand(input.trim().to_string())),
    }
}

fn parse_direction(word: &str) -> Result<Direction, CommandError> {
    if let Some(dir) = Direction::from_str(word) {
        return Ok(dir);
    }
    word.parse::<u8>()
        .ok()
        .and_then(|n| Direction::try_from(n).ok())
        .ok_or_else(|| CommandError::InvalidDirection(word.to_string()))
}

/// Parse `input` and apply it to `session`
///
/// Rejected commands leave the session untouched.
pub fn apply_command<R: TileRng>(
    session: &mut Session<R>,
    input: &str,
) -> Result<SessionEvents, CommandError> {
    let action = parse_command(input)?;
    Ok(session.apply(action))
}
