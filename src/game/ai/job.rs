//! Computer move computation
//!
//! The controller hands out a [`SearchJob`] holding its own snapshot of the
//! position, so the search mutates and reverts a position nobody else can
//! see. The result comes back as a [`SearchOutcome`] tagged with the
//! generation it was started in; the controller drops it if the game was
//! restarted or ended in the meantime.

use crate::game::{GameError, GameOpResult};
use chess_engine::constants::AB_INF;
use chess_engine::{
    ChessEngineError, ChessMove, ChessPosition, Color, MaterialEvaluator, SearchStats, Searcher,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// One search request with exclusive ownership of its position
#[derive(Debug)]
pub struct SearchJob {
    pub position: ChessPosition,
    pub depth: u32,
    pub generation: u64,
    stop: Arc<AtomicBool>,
}

impl SearchJob {
    pub fn new(position: ChessPosition, depth: u32, generation: u64, stop: Arc<AtomicBool>) -> Self {
        Self {
            position,
            depth,
            generation,
            stop,
        }
    }

    /// Run the search to completion on the current thread
    pub fn run(mut self) -> SearchOutcome {
        let start = Instant::now();
        let color = self.position.turn();
        let maximizing = color == Color::White;

        info!(
            "[AI] Searching for {:?} | depth {} | generation {}",
            color, self.depth, self.generation
        );

        let mut searcher = Searcher::with_stop_flag(Arc::clone(&self.stop));
        let result = searcher.run(
            &mut self.position,
            &MaterialEvaluator,
            self.depth,
            -AB_INF,
            AB_INF,
            maximizing,
        );
        let stats = searcher.stats();
        let elapsed = start.elapsed();

        match result {
            Ok(found) => {
                info!(
                    "[AI] Best move: {} | score {} | nodes {} | {:.2}s",
                    found
                        .best_move
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "none".to_string()),
                    found.score,
                    stats.nodes,
                    elapsed.as_secs_f32()
                );
                SearchOutcome {
                    generation: self.generation,
                    best_move: found.best_move,
                    score: found.score,
                    depth: self.depth,
                    stats,
                    elapsed,
                    aborted: false,
                }
            }
            Err(err) => {
                let aborted = matches!(err, ChessEngineError::SearchAborted { .. });
                warn!("[AI] Search ended without a move: {}", err);
                SearchOutcome {
                    generation: self.generation,
                    best_move: None,
                    score: 0,
                    depth: self.depth,
                    stats,
                    elapsed,
                    aborted,
                }
            }
        }
    }
}

/// What a finished (or abandoned) search produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub generation: u64,
    pub best_move: Option<ChessMove>,
    pub score: i32,
    pub depth: u32,
    pub stats: SearchStats,
    pub elapsed: Duration,
    /// The stop flag was raised before the search completed
    pub aborted: bool,
}

impl SearchOutcome {
    /// Outcome standing in for a search task that never reported back
    pub fn failed(generation: u64) -> Self {
        Self {
            generation,
            best_move: None,
            score: 0,
            depth: 0,
            stats: SearchStats::default(),
            elapsed: Duration::ZERO,
            aborted: false,
        }
    }
}

/// Figures from the most recent computer move, for the status line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AIStatistics {
    pub last_score: i32,
    pub last_depth: u32,
    pub last_nodes: u64,
    pub thinking_time: Duration,
}

impl AIStatistics {
    pub fn record(&mut self, outcome: &SearchOutcome) {
        self.last_score = outcome.score;
        self.last_depth = outcome.depth;
        self.last_nodes = outcome.stats.nodes;
        self.thinking_time = outcome.elapsed;
    }
}

/// Run `job` on the blocking pool after `delay`
///
/// The delay lets the front-end show that the computer is thinking before
/// the search occupies a worker thread.
pub fn spawn_search(job: SearchJob, delay: Duration) -> JoinHandle<GameOpResult<SearchOutcome>> {
    tokio::spawn(async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        tokio::task::spawn_blocking(move || job.run())
            .await
            .map_err(|e| GameError::SearchTask {
                message: e.to_string(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(fen: &str, depth: u32) -> SearchJob {
        let position = ChessPosition::from_fen(fen).expect("valid fen");
        SearchJob::new(position, depth, 1, Arc::new(AtomicBool::new(false)))
    }

    #[test]
    fn test_job_finds_hanging_queen() {
        let outcome = job("3qk3/8/8/8/8/8/8/3QK3 w - - 0 1", 1).run();

        assert_eq!(outcome.best_move, Some("d1d8".parse().expect("valid uci")));
        assert_eq!(outcome.generation, 1);
        assert!(!outcome.aborted);
        assert!(outcome.stats.nodes > 1);
    }

    #[test]
    fn test_cancelled_job_reports_abort() {
        let stop = Arc::new(AtomicBool::new(true));
        let position = ChessPosition::new();
        let job = SearchJob::new(position, 3, 1, Arc::clone(&stop));

        let outcome = job.run();

        assert!(outcome.aborted);
        assert_eq!(outcome.best_move, None);
    }

    #[test]
    fn test_statistics_record() {
        let mut stats = AIStatistics::default();
        let outcome = SearchOutcome {
            generation: 3,
            best_move: None,
            score: -120,
            depth: 2,
            stats: SearchStats {
                nodes: 400,
                cutoffs: 12,
            },
            elapsed: Duration::from_millis(15),
            aborted: false,
        };

        stats.record(&outcome);

        assert_eq!(stats.last_score, -120);
        assert_eq!(stats.last_depth, 2);
        assert_eq!(stats.last_nodes, 400);
        assert_eq!(stats.thinking_time, Duration::from_millis(15));
    }

    #[tokio::test]
    async fn test_spawn_search_returns_outcome() {
        let handle = spawn_search(job("3qk3/8/8/8/8/8/8/3QK3 b - - 0 1", 1), Duration::ZERO);

        let outcome = handle
            .await
            .expect("task should not panic")
            .expect("search task should complete");

        assert_eq!(outcome.best_move, Some("d8d1".parse().expect("valid uci")));
    }
}
