//! Computer opponent
//!
//! # Architecture
//!
//! - [`GameMode`]: which colour, if any, the computer plays
//! - [`SearchJob`]: a position snapshot plus depth, handed out by the turn
//!   controller when it enters `ComputerThinking`
//! - [`spawn_search`]: runs a job on tokio's blocking pool
//! - [`SearchOutcome`]: returned to the controller, which applies the move
//!   through the same path as a human move
//!
//! The controller's own position is never touched by the search.

pub mod job;
pub mod resource;

pub use job::{spawn_search, AIStatistics, SearchJob, SearchOutcome};
pub use resource::{GameMode, PlayMode, PlayerSide};
