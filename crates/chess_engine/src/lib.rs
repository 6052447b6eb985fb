//! Decision engine for two-player chess
//!
//! Legality, terminal outcomes and notation come from the rules seam
//! ([`RulesEngine`], implemented by [`ChessPosition`] on top of `shakmaty`).
//! On top of it sit a material [`evaluation`] and a fixed-depth
//! alpha-beta [`search`].

pub mod constants;
pub mod error;
pub mod evaluation;
pub mod rules;
pub mod search;
pub mod types;

pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::{evaluate, Evaluator, MaterialEvaluator};
pub use rules::{ChessPosition, RulesEngine};
pub use search::{find_best_move, search, SearchStats, Searcher};
pub use types::{ChessMove, Outcome, SearchResult};

// Re-exported so dependants name squares and pieces with the same types
pub use shakmaty::{Color, File, Piece, Rank, Role, Square};
