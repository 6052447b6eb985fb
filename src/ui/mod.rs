//! Terminal front-end
//!
//! - `commands` - Parses input lines into board clicks and commands
//! - `terminal` - Renders the board, clocks, status and history as text
//!
//! The front-end holds no game state; it reads everything from the
//! [`crate::game::TurnController`].

pub mod commands;
pub mod terminal;

pub use commands::{parse_command, Command};
pub use terminal::{render, HELP};
