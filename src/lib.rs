pub mod core;
pub mod game;
pub mod ui;

pub use self::core::GameSettings;
pub use self::game::{GameConfig, GameResult, GameSession, TurnController, TurnPhase, TurnState};
