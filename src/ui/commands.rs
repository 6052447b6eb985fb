//! Terminal command parsing
//!
//! One command per input line. Squares stand in for board clicks, so the
//! turn controller sees the same intents a graphical front-end would send.

use chess_engine::{ChessMove, Role, Square};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A board click, e.g. `e2`
    Square(Square),
    /// A whole move in coordinate notation, e.g. `e7e8q`
    Move(ChessMove),
    /// A promotion piece kind: `q`, `r`, `b` or `n`
    Promote(Role),
    Flip,
    Restart,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line; blank lines yield `None`
pub fn parse_command(line: &str) -> Option<Command> {
    let text = line.trim().to_ascii_lowercase();
    if text.is_empty() {
        return None;
    }

    let command = match text.as_str() {
        "flip" => Command::Flip,
        "restart" | "new" => Command::Restart,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "q" | "queen" => Command::Promote(Role::Queen),
        "r" | "rook" => Command::Promote(Role::Rook),
        "b" | "bishop" => Command::Promote(Role::Bishop),
        "n" | "knight" => Command::Promote(Role::Knight),
        other => {
            if let Ok(square) = other.parse::<Square>() {
                Command::Square(square)
            } else if let Ok(mv) = other.parse::<ChessMove>() {
                Command::Move(mv)
            } else {
                Command::Unknown(line.trim().to_string())
            }
        }
    };
    Some(command)
}
