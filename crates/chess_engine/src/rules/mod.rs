//! Rules engine seam
//!
//! The search and the turn controller never inspect board internals; they
//! drive a position through this trait. [`ChessPosition`] is the concrete
//! implementation backed by `shakmaty`.
//!
//! ## Module Organization
//!
//! - `position` - `shakmaty`-backed position with apply/undo and draw bookkeeping

mod position;

pub use position::ChessPosition;

use crate::error::ChessEngineResult;
use crate::types::Outcome;
use std::fmt::Debug;

/// Operations the search needs from a rules implementation
///
/// Implementations must enumerate legal moves in a stable order for a given
/// position: the search breaks ties by taking the first move encountered.
pub trait RulesEngine {
    type Move: Clone + PartialEq + Debug;

    /// All legal moves for the side to move
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play a legal move, mutating the position in place
    fn apply(&mut self, mv: &Self::Move) -> ChessEngineResult<()>;

    /// Revert the most recent [`RulesEngine::apply`]
    fn undo(&mut self) -> ChessEngineResult<()>;

    /// Terminal outcome of the current position, if any
    fn outcome(&self) -> Option<Outcome>;

    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}
