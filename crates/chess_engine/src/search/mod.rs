//! Minimax search with alpha-beta pruning
//!
//! Fixed depth, material evaluation only. No iterative deepening, move
//! ordering or transposition table: every call searches from scratch, in
//! the rules engine's move-generation order.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Recursive alpha-beta over any [`crate::RulesEngine`]

mod alphabeta;

pub use alphabeta::{find_best_move, search, SearchStats, Searcher};
