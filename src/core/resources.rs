//! Game-wide configuration
//!
//! [`GameSettings`] is read once when a session starts. Command-line flags
//! override individual fields before the controller is built.

use crate::game::ai::{PlayMode, PlayerSide};
use chess_engine::constants::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};
use serde::{Deserialize, Serialize};

/// Settings persisted between sessions
///
/// Missing fields in a stored file fall back to their defaults, so files
/// written by older versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Starting time per side in seconds
    pub clock_seconds: u32,

    /// Fischer increment credited after each move, in seconds
    pub increment_seconds: u32,

    /// Plies searched for the computer's move
    pub search_depth: u32,

    /// Pause before the computer starts searching, so "thinking" is visible
    pub think_delay_ms: u64,

    /// Human opponent or computer opponent
    pub mode: PlayMode,

    /// Which side the local player takes against the computer
    pub player_side: PlayerSide,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            clock_seconds: 600,
            increment_seconds: 0,
            search_depth: DEFAULT_SEARCH_DEPTH,
            think_delay_ms: 500,
            mode: PlayMode::VsComputer,
            player_side: PlayerSide::White,
        }
    }
}

impl GameSettings {
    /// Search depth clamped to the supported range
    pub fn effective_depth(&self) -> u32 {
        self.search_depth.clamp(1, MAX_SEARCH_DEPTH)
    }

    /// Copy of these settings with out-of-range values clamped
    pub fn sanitized(mut self) -> Self {
        self.search_depth = self.effective_depth();
        self.clock_seconds = self.clock_seconds.max(1);
        self
    }
}
