//! Chess game flow
//!
//! Everything between the player's input and the decision engine.
//!
//! # Module Organization
//!
//! - `controller` - [`TurnController`], the turn-flow state machine
//! - `turn_state` - [`TurnState`], [`TurnPhase`] and the [`Update`] returned by intents
//! - `clock` - [`GameClock`], per-side countdown with optional increment
//! - `history` - [`MoveLog`] of applied moves in both notations
//! - `game_over` - [`GameResult`] codes reported when a game ends
//! - `promotion` - Picker layout for pawn promotion
//! - `ai` - Computer opponent: mode selection and background search jobs
//! - `session` - [`GameSession`], the async loop tying input, clock and search together
//! - `error` - [`GameError`]
//!
//! Legality, notation and terminal detection all come from the
//! `chess_engine` crate; this module never inspects the board itself.

pub mod ai;
pub mod clock;
pub mod controller;
pub mod error;
pub mod game_over;
pub mod history;
pub mod promotion;
pub mod session;
pub mod turn_state;

pub use ai::{GameMode, PlayMode, PlayerSide, SearchJob, SearchOutcome};
pub use clock::GameClock;
pub use controller::{GameConfig, TurnController};
pub use error::{GameError, GameOpResult};
pub use game_over::GameResult;
pub use history::{MoveLog, MoveRecord};
pub use session::GameSession;
pub use turn_state::{TurnPhase, TurnState, Update};
