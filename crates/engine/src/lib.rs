//! Host-side game flow built on the core engine.
//!
//! - [`session`]: best-score tracking and one-shot win/loss events, driven by
//!   the engine's state-change notifications
//! - [`command`]: text commands (`"left"`, `"move 2"`, `"restart"`) for
//!   weakly-typed front ends

pub mod command;
pub mod session;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use command::{apply_command, parse_command, CommandError};
pub use session::{Session, SessionEvent, SessionEvents};
