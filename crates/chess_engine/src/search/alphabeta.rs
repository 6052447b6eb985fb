//! Alpha-beta search (recursive mutate/revert)
//!
//! The search owns the position exclusively for the duration of a call: it
//! applies a move, recurses, then undoes it, so only one live position ever
//! exists.

use crate::constants::AB_INF;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::evaluation::{Evaluator, MaterialEvaluator};
use crate::rules::{ChessPosition, RulesEngine};
use crate::types::{ChessMove, SearchResult};
use shakmaty::Color;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Work counters for one search call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root and leaves included
    pub nodes: u64,
    /// Times the window closed and remaining siblings were skipped
    pub cutoffs: u64,
}

/// Search driver carrying statistics and an optional stop flag
///
/// The stop flag is polled at every node. Once raised, the search unwinds
/// without visiting further positions and [`Searcher::run`] reports
/// [`ChessEngineError::SearchAborted`].
#[derive(Debug, Default)]
pub struct Searcher {
    stop: Option<Arc<AtomicBool>>,
    stats: SearchStats,
    failure: Option<ChessEngineError>,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_flag(stop: Arc<AtomicBool>) -> Self {
        Self {
            stop: Some(stop),
            ..Self::default()
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run a search to completion or until the stop flag is raised
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::SearchAborted`] if cancelled, or the
    /// rules engine's error if a move could not be reverted.
    pub fn run<R, E>(
        &mut self,
        rules: &mut R,
        evaluator: &E,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> ChessEngineResult<SearchResult<R::Move>>
    where
        R: RulesEngine,
        E: Evaluator<R>,
    {
        self.stats = SearchStats::default();
        self.failure = None;

        let result = self.alphabeta(rules, evaluator, depth, alpha, beta, maximizing);

        debug!(
            "[SEARCH] depth {} | score {} | nodes {} | cutoffs {}",
            depth, result.score, self.stats.nodes, self.stats.cutoffs
        );

        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(result),
        }
    }

    fn stop_requested(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn alphabeta<R, E>(
        &mut self,
        rules: &mut R,
        evaluator: &E,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult<R::Move>
    where
        R: RulesEngine,
        E: Evaluator<R>,
    {
        self.stats.nodes += 1;

        if self.failure.is_none() && self.stop_requested() {
            self.failure = Some(ChessEngineError::SearchAborted {
                nodes: self.stats.nodes,
            });
        }
        if self.failure.is_some() || depth == 0 || rules.is_terminal() {
            return SearchResult::leaf(evaluator.evaluate(rules));
        }

        let mut best_score = if maximizing { -AB_INF } else { AB_INF };
        let mut best_move = None;

        for mv in rules.legal_moves() {
            if let Err(err) = rules.apply(&mv) {
                warn!("[SEARCH] Skipping move {:?}: {}", mv, err);
                continue;
            }

            let child = self.alphabeta(rules, evaluator, depth - 1, alpha, beta, !maximizing);

            if let Err(err) = rules.undo() {
                error!("[SEARCH] Failed to revert {:?}: {}", mv, err);
                self.failure = Some(err);
            }
            if self.failure.is_some() {
                break;
            }

            let score = child.score;
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if best_move.is_none() {
            // Nothing was searched below this node
            return SearchResult::leaf(evaluator.evaluate(rules));
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }
}

/// Minimax with alpha-beta pruning
///
/// Returns `(evaluate(position), None)` at depth 0 or on a terminal
/// position. Among equally scored moves the first one generated wins.
pub fn search<R, E>(
    rules: &mut R,
    evaluator: &E,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> SearchResult<R::Move>
where
    R: RulesEngine,
    E: Evaluator<R>,
{
    Searcher::new().alphabeta(rules, evaluator, depth, alpha, beta, maximizing)
}

/// Best move for the side to move, full window, material evaluation
pub fn find_best_move(position: &mut ChessPosition, depth: u32) -> SearchResult<ChessMove> {
    let maximizing = position.turn() == Color::White;
    search(position, &MaterialEvaluator, depth, -AB_INF, AB_INF, maximizing)
}
