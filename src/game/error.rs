//! Error types for game module
//!
//! Move intents never fail; they are ignored when they do not apply. Errors
//! here come from setting a game up or from the computer-player task.

use chess_engine::ChessEngineError;

/// Errors that can occur while creating or driving a game
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The rules engine rejected the requested start position
    #[error("Invalid start position: {0}")]
    InvalidStartPosition(#[from] ChessEngineError),

    /// The background search task panicked or was cancelled by the runtime
    #[error("Search task failed: {message}")]
    SearchTask { message: String },

    /// Terminal input/output failed
    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for game operations
pub type GameOpResult<T> = Result<T, GameError>;
