//! Terminal renderer for the 2048 board.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] draws a [`GameSnapshot`](crate::core::GameSnapshot) into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes only the changed cells.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so views can be tested without a terminal
//! - Tiles sized in terminal cells (default 7x3) so the grid looks square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
