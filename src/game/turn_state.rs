//! Turn flow state
//!
//! [`TurnState`] is the single source of truth for where the game is within
//! a turn. Each variant carries only the data valid in that phase, so a
//! pending promotion without a selection cannot be represented.

use crate::game::GameResult;
use chess_engine::{ChessMove, Square};

/// Where the game is within the current turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the side to move to pick one of its pieces
    AwaitingSelection,

    /// A piece is selected; `moves` are its legal moves in generation order
    AwaitingDestination { from: Square, moves: Vec<ChessMove> },

    /// A pawn move to the last rank needs a piece kind
    ///
    /// `moves` holds the four completed candidates for `from` -> `to`.
    AwaitingPromotionChoice {
        from: Square,
        to: Square,
        moves: Vec<ChessMove>,
    },

    /// The computer is searching; human intents are ignored
    ComputerThinking,

    /// Terminal; only restart leaves this state
    GameOver(GameResult),
}

impl TurnState {
    pub fn phase(&self) -> TurnPhase {
        match self {
            TurnState::AwaitingSelection => TurnPhase::AwaitingSelection,
            TurnState::AwaitingDestination { .. } => TurnPhase::AwaitingDestination,
            TurnState::AwaitingPromotionChoice { .. } => TurnPhase::AwaitingPromotionChoice,
            TurnState::ComputerThinking => TurnPhase::ComputerThinking,
            TurnState::GameOver(_) => TurnPhase::GameOver,
        }
    }

    pub fn result(&self) -> Option<GameResult> {
        match self {
            TurnState::GameOver(result) => Some(*result),
            _ => None,
        }
    }

    /// Square of the selected piece, if one is selected
    pub fn selected(&self) -> Option<Square> {
        match self {
            TurnState::AwaitingDestination { from, .. }
            | TurnState::AwaitingPromotionChoice { from, .. } => Some(*from),
            _ => None,
        }
    }
}

/// Fieldless discriminant of [`TurnState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    AwaitingSelection,
    AwaitingDestination,
    AwaitingPromotionChoice,
    ComputerThinking,
    GameOver,
}

impl TurnPhase {
    /// Check if this phase accepts human move intents
    pub fn accepts_input(&self) -> bool {
        matches!(
            self,
            TurnPhase::AwaitingSelection
                | TurnPhase::AwaitingDestination
                | TurnPhase::AwaitingPromotionChoice
        )
    }

    /// Whether moving from `self` to `next` is a legal turn-flow step
    ///
    /// Restart is not a transition; it rebuilds the state from scratch.
    pub fn can_transition_to(&self, next: TurnPhase) -> bool {
        use TurnPhase::*;

        match (self, next) {
            (GameOver, _) => false,
            (_, GameOver) => true,
            (AwaitingSelection, AwaitingDestination) => true,
            (AwaitingDestination, AwaitingDestination) => true,
            (AwaitingDestination, AwaitingSelection) => true,
            (AwaitingDestination, AwaitingPromotionChoice) => true,
            (AwaitingDestination, ComputerThinking) => true,
            (AwaitingPromotionChoice, AwaitingSelection) => true,
            (AwaitingPromotionChoice, ComputerThinking) => true,
            (ComputerThinking, AwaitingSelection) => true,
            _ => false,
        }
    }
}

/// What an intent did: the phase afterwards and, if this intent ended the
/// game, the result code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update {
    pub phase: TurnPhase,
    pub result: Option<GameResult>,
}
