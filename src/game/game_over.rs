//! Game result codes
//!
//! A [`GameResult`] is produced exactly once per game, when the turn
//! controller enters its terminal state. Board outcomes come from the rules
//! engine; time-outs come from the clock.
//!
//! # Draw Conditions
//!
//! - **Stalemate**: side to move has no legal moves and is not in check
//! - **Insufficient material**: neither side can deliver mate
//! - **75-move rule**: 75 moves by each side without a capture or pawn move
//! - **Fivefold repetition**: the same position reached five times
//!
//! FIDE Laws of Chess, Articles 5, 6 and 9.

use chess_engine::{Color, Outcome};
use std::fmt;

/// Why the game ended, and who won if anybody did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The named side delivered checkmate
    Checkmate(Color),
    Stalemate,
    DrawInsufficientMaterial,
    Draw75Move,
    DrawRepetition,
    /// The opponent's clock reached zero; the named side wins
    TimeOut(Color),
}

impl GameResult {
    /// Human-readable result line for the status bar
    pub fn message(&self) -> &'static str {
        match self {
            GameResult::Checkmate(Color::White) => "White wins by checkmate!",
            GameResult::Checkmate(Color::Black) => "Black wins by checkmate!",
            GameResult::Stalemate => "Draw by stalemate",
            GameResult::DrawInsufficientMaterial => "Draw by insufficient material",
            GameResult::Draw75Move => "Draw by the 75-move rule",
            GameResult::DrawRepetition => "Draw by fivefold repetition",
            GameResult::TimeOut(Color::White) => "White wins on time!",
            GameResult::TimeOut(Color::Black) => "Black wins on time!",
        }
    }

    /// The winning side, or `None` for draws
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Checkmate(color) | GameResult::TimeOut(color) => Some(*color),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none()
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GameResult::TimeOut(_))
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self, GameResult::Checkmate(_))
    }
}

impl From<Outcome> for GameResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Checkmate { winner } => GameResult::Checkmate(winner),
            Outcome::Stalemate => GameResult::Stalemate,
            Outcome::InsufficientMaterial => GameResult::DrawInsufficientMaterial,
            Outcome::SeventyFiveMoves => GameResult::Draw75Move,
            Outcome::FivefoldRepetition => GameResult::DrawRepetition,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
