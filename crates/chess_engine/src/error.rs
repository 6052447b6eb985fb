//! Error types for chess engine
//!
//! Provides custom error types for chess engine operations including
//! position setup, move application and search.

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// FEN string could not be parsed or describes an impossible position
    #[error("Invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },

    /// Move text could not be parsed as coordinate notation
    #[error("Invalid move notation: {text}")]
    InvalidNotation { text: String },

    /// Move is not legal in the current position
    #[error("Illegal move {uci} in position {fen}")]
    IllegalMove { uci: String, fen: String },

    /// Undo requested with no applied move to revert
    #[error("Nothing to undo: no moves have been applied")]
    NothingToUndo,

    /// Search was cancelled through its stop flag before completing
    #[error("Search aborted after {nodes} nodes")]
    SearchAborted { nodes: u64 },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
