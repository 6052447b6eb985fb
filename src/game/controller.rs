//! Turn controller
//!
//! Owns the game session: the position, the [`TurnState`], the clock and
//! the move log. The presentation layer forwards square clicks and
//! commands; every intent returns an [`Update`] and never an error.
//! Intents that do not apply in the current state are ignored.
//!
//! # Turn flow
//!
//! ```text
//! AwaitingSelection --friendly piece--> AwaitingDestination
//! AwaitingDestination --legal target--> apply --> AwaitingSelection
//!                                                 | ComputerThinking
//!                                                 | GameOver
//! AwaitingDestination --promotion target--> AwaitingPromotionChoice
//! AwaitingPromotionChoice --piece kind--> apply
//! ComputerThinking --search result--> apply
//! ```
//!
//! # Computer moves
//!
//! [`TurnController::begin_search`] hands out at most one [`SearchJob`] at
//! a time. Its result is fed back through
//! [`TurnController::finish_search`]. Restart and time-out bump the
//! generation counter and raise the job's stop flag, so a late result from
//! an abandoned search is discarded.

use crate::core::GameSettings;
use crate::game::ai::{AIStatistics, GameMode, SearchJob, SearchOutcome};
use crate::game::promotion;
use crate::game::{
    GameClock, GameOpResult, GameResult, MoveLog, TurnPhase, TurnState, Update,
};
use chess_engine::constants::DEFAULT_SEARCH_DEPTH;
use chess_engine::{ChessMove, ChessPosition, Color, Role, RulesEngine, Square};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Parameters for a new game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub search_depth: u32,
    pub clock_seconds: u32,
    pub increment_seconds: u32,
    /// Custom start position; the standard one when `None`
    pub start_fen: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsHuman,
            search_depth: DEFAULT_SEARCH_DEPTH,
            clock_seconds: 600,
            increment_seconds: 0,
            start_fen: None,
        }
    }
}

impl GameConfig {
    /// Resolve settings into a concrete game, flipping a coin for a random side
    pub fn from_settings(settings: &GameSettings, start_fen: Option<String>) -> Self {
        Self {
            mode: GameMode::resolve(settings.mode, settings.player_side),
            search_depth: settings.effective_depth(),
            clock_seconds: settings.clock_seconds,
            increment_seconds: settings.increment_seconds,
            start_fen,
        }
    }
}

/// The single active game
#[derive(Debug)]
pub struct TurnController {
    position: ChessPosition,
    initial: ChessPosition,
    state: TurnState,
    mode: GameMode,
    depth: u32,
    clock_seconds: u32,
    clock: GameClock,
    log: MoveLog,
    flipped: bool,
    generation: u64,
    search_in_flight: bool,
    stop: Option<Arc<AtomicBool>>,
    ai_stats: AIStatistics,
}

impl TurnController {
    /// Start a game
    ///
    /// # Errors
    ///
    /// Returns [`crate::game::GameError::InvalidStartPosition`] if
    /// `config.start_fen` does not describe a legal position.
    pub fn new(config: GameConfig) -> GameOpResult<Self> {
        let initial = match &config.start_fen {
            Some(fen) => ChessPosition::from_fen(fen)?,
            None => ChessPosition::new(),
        };

        // The computer's side is shown at the top
        let flipped = config.mode.computer_color() == Some(Color::White);

        let mut controller = Self {
            position: initial.clone(),
            initial,
            state: TurnState::AwaitingSelection,
            mode: config.mode,
            depth: config.search_depth.max(1),
            clock_seconds: config.clock_seconds,
            clock: GameClock::new(config.clock_seconds, config.increment_seconds),
            log: MoveLog::new(),
            flipped,
            generation: 0,
            search_in_flight: false,
            stop: None,
            ai_stats: AIStatistics::default(),
        };
        controller.begin_game();

        info!(
            "[TURN] New game | {:?} | depth {} | clock {}s",
            controller.mode, controller.depth, controller.clock_seconds
        );
        Ok(controller)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn position(&self) -> &ChessPosition {
        &self.position
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    pub fn phase(&self) -> TurnPhase {
        self.state.phase()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    pub fn side_to_move(&self) -> Color {
        self.position.turn()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn search_depth(&self) -> u32 {
        self.depth
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn remaining(&self, color: Color) -> u32 {
        self.clock.remaining(color)
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn ai_stats(&self) -> AIStatistics {
        self.ai_stats
    }

    /// Restart counter; search results from older generations are stale
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.state.selected()
    }

    /// Destination squares of the selected piece, each listed once
    pub fn highlights(&self) -> Vec<Square> {
        let mut squares: Vec<Square> = Vec::new();
        if let TurnState::AwaitingDestination { moves, .. } = &self.state {
            for mv in moves {
                if !squares.contains(&mv.to) {
                    squares.push(mv.to);
                }
            }
        }
        squares
    }

    /// Picker layout while a promotion choice is pending
    pub fn promotion_picker(&self) -> Option<[(Role, Square); 4]> {
        match &self.state {
            TurnState::AwaitingPromotionChoice { to, .. } => Some(promotion::picker_squares(*to)),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Human intents
    // ------------------------------------------------------------------

    /// Pick up a piece of the side to move
    ///
    /// Records the piece's legal moves and waits for a destination. An empty
    /// square or an opponent piece leaves the state unchanged.
    pub fn select(&mut self, square: Square) -> Update {
        if !matches!(
            self.phase(),
            TurnPhase::AwaitingSelection | TurnPhase::AwaitingDestination
        ) {
            debug!("[TURN] Ignoring selection of {} in {:?}", square, self.phase());
            return self.update(None);
        }

        if !self.is_own_piece(square) {
            debug!("[TURN] Ignoring selection of {}: no piece of the side to move", square);
            return self.update(None);
        }

        let moves = self.position.legal_moves_from(square);
        debug!("[TURN] Selected {} with {} legal moves", square, moves.len());
        self.transition(TurnState::AwaitingDestination {
            from: square,
            moves,
        });
        self.update(None)
    }

    /// Complete the selected piece's move on `square`
    ///
    /// A promotion target waits for a piece kind. Clicking another piece of
    /// the side to move re-selects; anything else clears the selection.
    pub fn choose_destination(&mut self, square: Square) -> Update {
        let (from, moves) = match &self.state {
            TurnState::AwaitingDestination { from, moves } => (*from, moves.clone()),
            _ => {
                debug!("[TURN] Ignoring destination {} in {:?}", square, self.phase());
                return self.update(None);
            }
        };

        let targets: Vec<ChessMove> = moves.into_iter().filter(|m| m.to == square).collect();

        if targets.iter().any(ChessMove::is_promotion) {
            let promotions: Vec<ChessMove> =
                targets.into_iter().filter(ChessMove::is_promotion).collect();
            debug!("[TURN] Promotion pending for {}{}", from, square);
            self.transition(TurnState::AwaitingPromotionChoice {
                from,
                to: square,
                moves: promotions,
            });
            return self.update(None);
        }

        if let Some(mv) = targets.first().copied() {
            return self.play(mv);
        }

        if self.is_own_piece(square) {
            return self.select(square);
        }

        debug!("[TURN] {} is not a destination of {}; clearing selection", square, from);
        self.transition(TurnState::AwaitingSelection);
        self.update(None)
    }

    /// Finish a pending promotion with `role`
    ///
    /// Anything other than Queen, Rook, Bishop or Knight is ignored.
    pub fn choose_promotion(&mut self, role: Role) -> Update {
        let chosen = match &self.state {
            TurnState::AwaitingPromotionChoice { moves, .. } => moves
                .iter()
                .find(|m| m.promotion == Some(role))
                .copied(),
            _ => {
                debug!("[TURN] Ignoring promotion choice in {:?}", self.phase());
                return self.update(None);
            }
        };

        match chosen {
            Some(mv) => self.play(mv),
            None => {
                debug!("[TURN] Ignoring invalid promotion piece {:?}", role);
                self.update(None)
            }
        }
    }

    /// Finish a pending promotion by clicking a picker square
    pub fn choose_promotion_at(&mut self, square: Square) -> Update {
        let role = match &self.state {
            TurnState::AwaitingPromotionChoice { to, .. } => promotion::role_at(*to, square),
            _ => None,
        };

        match role {
            Some(role) => self.choose_promotion(role),
            None => {
                debug!("[TURN] Ignoring click on {} outside the promotion picker", square);
                self.update(None)
            }
        }
    }

    /// Route a board click to the operation the current state expects
    pub fn click(&mut self, square: Square) -> Update {
        match self.phase() {
            TurnPhase::AwaitingSelection => self.select(square),
            TurnPhase::AwaitingDestination => self.choose_destination(square),
            TurnPhase::AwaitingPromotionChoice => self.choose_promotion_at(square),
            TurnPhase::ComputerThinking | TurnPhase::GameOver => self.update(None),
        }
    }

    /// Start over from the initial position with fresh clocks
    ///
    /// Keeps the mode and sides. Any outstanding search is cancelled.
    pub fn restart(&mut self) -> Update {
        info!("[TURN] Restarting game");
        self.position = self.initial.clone();
        self.log.clear();
        self.clock.reset(self.clock_seconds);
        self.begin_game();
        self.update(self.state.result())
    }

    /// Swap board orientation; no effect on the game
    pub fn flip(&mut self) -> Update {
        self.flipped = !self.flipped;
        self.update(None)
    }

    /// One second of wall time has passed
    pub fn tick(&mut self) -> Update {
        if self.phase() == TurnPhase::GameOver {
            return self.update(None);
        }

        match self.clock.tick(self.position.turn()) {
            Some(result) => {
                info!("[CLOCK] {:?} ran out of time", self.position.turn());
                self.end_game(result);
                self.update(Some(result))
            }
            None => self.update(None),
        }
    }

    // ------------------------------------------------------------------
    // Computer turns
    // ------------------------------------------------------------------

    /// Hand out the search for the computer's move
    ///
    /// Returns `None` unless the computer is to move and no search is
    /// already outstanding.
    pub fn begin_search(&mut self) -> Option<SearchJob> {
        if self.phase() != TurnPhase::ComputerThinking || self.search_in_flight {
            return None;
        }

        let stop = Arc::new(AtomicBool::new(false));
        self.stop = Some(Arc::clone(&stop));
        self.search_in_flight = true;

        info!(
            "[AI] Computer ({:?}) thinking at depth {}",
            self.position.turn(),
            self.depth
        );
        Some(SearchJob::new(
            self.position.clone(),
            self.depth,
            self.generation,
            stop,
        ))
    }

    /// Apply a finished search's move
    ///
    /// Results from an earlier generation are dropped. If the search found
    /// no move, nothing is played and only the terminal check is repeated.
    pub fn finish_search(&mut self, outcome: SearchOutcome) -> Update {
        if outcome.generation != self.generation || self.phase() != TurnPhase::ComputerThinking {
            debug!(
                "[AI] Discarding result from generation {} (current {})",
                outcome.generation, self.generation
            );
            return self.update(None);
        }

        self.search_in_flight = false;
        self.stop = None;
        self.ai_stats.record(&outcome);

        if let Some(mv) = outcome.best_move {
            if self.position.legal_moves().contains(&mv) {
                return self.play(mv);
            }
            warn!("[AI] Search returned illegal move {}", mv);
        }

        self.recover_without_move()
    }

    /// Search and play the computer's move on the current thread
    pub fn play_computer_move(&mut self) -> Update {
        match self.begin_search() {
            Some(job) => {
                let outcome = job.run();
                self.finish_search(outcome)
            }
            None => self.update(None),
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn update(&self, result: Option<GameResult>) -> Update {
        Update {
            phase: self.phase(),
            result,
        }
    }

    fn is_own_piece(&self, square: Square) -> bool {
        self.position
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.position.turn())
    }

    fn transition(&mut self, next: TurnState) {
        let (from, to) = (self.phase(), next.phase());
        if !from.can_transition_to(to) {
            error!("[TURN] Invalid turn state transition: {:?} -> {:?}", from, to);
        }
        debug!("[TURN] {:?} -> {:?}", from, to);
        self.state = next;
    }

    /// Fresh game bookkeeping shared by construction and restart
    fn begin_game(&mut self) {
        self.cancel_search();
        self.clock.start();
        self.state = match self.position.outcome() {
            Some(outcome) => {
                self.clock.stop();
                TurnState::GameOver(GameResult::from(outcome))
            }
            None if self.mode.is_computer(self.position.turn()) => TurnState::ComputerThinking,
            None => TurnState::AwaitingSelection,
        };
    }

    /// Decide the state for the side now to move
    fn enter_turn(&mut self) -> Option<GameResult> {
        if let Some(outcome) = self.position.outcome() {
            let result = GameResult::from(outcome);
            self.end_game(result);
            return Some(result);
        }

        if self.mode.is_computer(self.position.turn()) {
            self.transition(TurnState::ComputerThinking);
        } else {
            self.transition(TurnState::AwaitingSelection);
        }
        None
    }

    /// Apply a legal move, log it, credit the clock and advance the turn
    fn play(&mut self, mv: ChessMove) -> Update {
        let mover = self.position.turn();
        let fullmove = self.position.fullmoves();
        let san = self.position.to_notation(&mv);

        if let Err(err) = self.position.apply(&mv) {
            warn!("[TURN] Rejected move {}: {}", mv, err);
            if self.phase() != TurnPhase::ComputerThinking {
                self.transition(TurnState::AwaitingSelection);
            }
            return self.update(None);
        }

        info!("[TURN] {:?} played {} ({})", mover, san, mv);
        self.log.add_move(mover, fullmove, mv, san);
        self.clock.apply_increment(mover);

        let result = self.enter_turn();
        self.update(result)
    }

    /// A search without a move only re-checks the terminal state
    ///
    /// A live position stays in `ComputerThinking` with no search in flight,
    /// so the next `begin_search` retries it.
    fn recover_without_move(&mut self) -> Update {
        if let Some(outcome) = self.position.outcome() {
            let result = GameResult::from(outcome);
            self.end_game(result);
            return self.update(Some(result));
        }

        warn!("[AI] Search produced no move, position is still live");
        self.update(None)
    }

    fn end_game(&mut self, result: GameResult) {
        self.clock.stop();
        self.cancel_search();
        info!("[TURN] Game over: {}", result);
        self.transition(TurnState::GameOver(result));
    }

    /// Stop any outstanding search and make its result stale
    fn cancel_search(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop.store(true, Ordering::Relaxed);
        }
        if self.search_in_flight {
            debug!("[AI] Cancelling search from generation {}", self.generation);
        }
        self.search_in_flight = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::Piece;

    fn human_game() -> TurnController {
        TurnController::new(GameConfig::default()).expect("standard start")
    }

    fn game_from(fen: &str, mode: GameMode) -> TurnController {
        TurnController::new(GameConfig {
            mode,
            start_fen: Some(fen.to_string()),
            ..GameConfig::default()
        })
        .expect("valid fen")
    }

    fn play(controller: &mut TurnController, uci: &str) -> Update {
        let mv: ChessMove = uci.parse().expect("valid uci");
        controller.select(mv.from);
        let update = controller.choose_destination(mv.to);
        match mv.promotion {
            Some(role) => controller.choose_promotion(role),
            None => update,
        }
    }

    #[test]
    fn test_starts_awaiting_selection() {
        let controller = human_game();

        assert_eq!(controller.phase(), TurnPhase::AwaitingSelection);
        assert_eq!(controller.side_to_move(), Color::White);
        assert!(controller.clock().running);
        assert!(!controller.is_flipped());
    }

    #[test]
    fn test_select_friendly_piece_records_moves() {
        let mut controller = human_game();

        let update = controller.select(Square::G1);

        assert_eq!(update.phase, TurnPhase::AwaitingDestination);
        match controller.state() {
            TurnState::AwaitingDestination { from, moves } => {
                assert_eq!(*from, Square::G1);
                assert_eq!(moves, &controller.position().legal_moves_from(Square::G1));
                assert_eq!(moves.len(), 2);
            }
            other => panic!("unexpected state {:?}", other),
        }
        let highlights = controller.highlights();
        assert_eq!(highlights.len(), 2);
        assert!(highlights.contains(&Square::F3));
        assert!(highlights.contains(&Square::H3));
    }

    #[test]
    fn test_select_empty_or_enemy_is_noop() {
        let mut controller = human_game();

        controller.select(Square::E4);
        assert_eq!(controller.state(), &TurnState::AwaitingSelection);

        controller.select(Square::E7);
        assert_eq!(controller.state(), &TurnState::AwaitingSelection);
    }

    #[test]
    fn test_reselect_own_piece() {
        let mut controller = human_game();
        controller.select(Square::E2);

        controller.choose_destination(Square::G1);

        assert_eq!(controller.selected_square(), Some(Square::G1));
        assert_eq!(controller.phase(), TurnPhase::AwaitingDestination);
    }

    #[test]
    fn test_bad_destination_clears_selection() {
        let mut controller = human_game();
        controller.select(Square::E2);

        let update = controller.choose_destination(Square::E5);

        assert_eq!(update.phase, TurnPhase::AwaitingSelection);
        assert!(controller.move_log().is_empty());
    }

    #[test]
    fn test_move_switches_side_and_logs() {
        let mut controller = human_game();

        let update = play(&mut controller, "e2e4");

        assert_eq!(update, Update { phase: TurnPhase::AwaitingSelection, result: None });
        assert_eq!(controller.side_to_move(), Color::Black);
        assert_eq!(controller.move_log().lines(), vec!["1. e4".to_string()]);
    }

    #[test]
    fn test_fools_mate_ends_game() {
        let mut controller = human_game();

        for uci in ["f2f3", "e7e5", "g2g4"] {
            play(&mut controller, uci);
        }
        let update = play(&mut controller, "d8h4");

        assert_eq!(update.phase, TurnPhase::GameOver);
        assert_eq!(update.result, Some(GameResult::Checkmate(Color::Black)));
        assert!(!controller.clock().running);
        assert_eq!(controller.move_log().last().map(|r| r.san.as_str()), Some("Qh4#"));
    }

    #[test]
    fn test_game_over_ignores_intents() {
        let mut controller = human_game();
        for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            play(&mut controller, uci);
        }

        controller.select(Square::A2);
        controller.tick();

        assert_eq!(controller.result(), Some(GameResult::Checkmate(Color::Black)));
        assert_eq!(controller.move_log().len(), 4);
    }

    #[test]
    fn test_promotion_routes_through_choice() {
        let mut controller = game_from("8/4P3/8/8/8/8/k7/4K3 w - - 0 1", GameMode::VsHuman);
        controller.select(Square::E7);

        let update = controller.choose_destination(Square::E8);

        assert_eq!(update.phase, TurnPhase::AwaitingPromotionChoice);
        assert_eq!(controller.side_to_move(), Color::White, "nothing applied yet");
        assert_eq!(
            controller.promotion_picker().map(|p| p[0]),
            Some((Role::Queen, Square::E8))
        );
    }

    #[test]
    fn test_invalid_promotion_choice_ignored() {
        let mut controller = game_from("8/4P3/8/8/8/8/k7/4K3 w - - 0 1", GameMode::VsHuman);
        controller.select(Square::E7);
        controller.choose_destination(Square::E8);

        controller.choose_promotion(Role::King);
        controller.choose_promotion_at(Square::D7);

        assert_eq!(controller.phase(), TurnPhase::AwaitingPromotionChoice);
    }

    #[test]
    fn test_promotion_picker_click() {
        let mut controller = game_from("8/4P3/8/8/8/8/k7/4K3 w - - 0 1", GameMode::VsHuman);
        controller.click(Square::E7);
        controller.click(Square::E8);

        controller.click(Square::E5);

        assert_eq!(
            controller.position().piece_at(Square::E8),
            Some(Piece {
                color: Color::White,
                role: Role::Knight
            })
        );
        assert_eq!(controller.side_to_move(), Color::Black);
    }

    #[test]
    fn test_timeout_declares_opponent() {
        let mut controller = TurnController::new(GameConfig {
            clock_seconds: 2,
            ..GameConfig::default()
        })
        .expect("standard start");

        assert_eq!(controller.tick().result, None);
        let update = controller.tick();

        assert_eq!(update.result, Some(GameResult::TimeOut(Color::Black)));
        assert_eq!(controller.remaining(Color::White), 0);
        assert_eq!(controller.remaining(Color::Black), 2);
    }

    #[test]
    fn test_increment_credited_to_mover() {
        let mut controller = TurnController::new(GameConfig {
            clock_seconds: 60,
            increment_seconds: 5,
            ..GameConfig::default()
        })
        .expect("standard start");

        controller.tick();
        play(&mut controller, "e2e4");

        assert_eq!(controller.remaining(Color::White), 64);
        assert_eq!(controller.remaining(Color::Black), 60);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut controller = human_game();
        play(&mut controller, "e2e4");
        controller.tick();
        let before = controller.generation();

        let update = controller.restart();

        assert_eq!(update.phase, TurnPhase::AwaitingSelection);
        assert!(controller.move_log().is_empty());
        assert_eq!(controller.side_to_move(), Color::White);
        assert_eq!(controller.remaining(Color::White), 600);
        assert!(controller.generation() > before);
    }

    #[test]
    fn test_flip_is_cosmetic() {
        let mut controller = human_game();
        controller.select(Square::E2);

        let update = controller.flip();

        assert!(controller.is_flipped());
        assert_eq!(update.phase, TurnPhase::AwaitingDestination);
    }

    #[test]
    fn test_computer_replies_after_human_move() {
        let mut controller = TurnController::new(GameConfig {
            mode: GameMode::VsComputer {
                computer: Color::Black,
            },
            search_depth: 1,
            ..GameConfig::default()
        })
        .expect("standard start");

        let update = play(&mut controller, "e2e4");
        assert_eq!(update.phase, TurnPhase::ComputerThinking);

        controller.select(Square::E7);
        assert_eq!(controller.phase(), TurnPhase::ComputerThinking, "input ignored");

        let update = controller.play_computer_move();

        assert_eq!(update.phase, TurnPhase::AwaitingSelection);
        assert_eq!(controller.side_to_move(), Color::White);
        assert_eq!(controller.move_log().len(), 2);
        assert!(controller.ai_stats().last_nodes > 0);
    }

    #[test]
    fn test_computer_moves_first_as_white() {
        let controller = TurnController::new(GameConfig {
            mode: GameMode::VsComputer {
                computer: Color::White,
            },
            ..GameConfig::default()
        })
        .expect("standard start");

        assert_eq!(controller.phase(), TurnPhase::ComputerThinking);
        assert!(controller.is_flipped());
    }

    #[test]
    fn test_single_outstanding_search() {
        let mut controller = game_from(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            GameMode::VsComputer {
                computer: Color::White,
            },
        );

        let first = controller.begin_search();
        let second = controller.begin_search();

        assert!(first.is_some());
        assert!(second.is_none());
    }

    #[test]
    fn test_stale_search_result_dropped() {
        let mut controller = game_from(
            "3qk3/8/8/8/8/8/8/3QK3 w - - 0 1",
            GameMode::VsComputer {
                computer: Color::White,
            },
        );
        let mut job = controller.begin_search().expect("computer to move");
        job.depth = 1;

        controller.restart();
        let update = controller.finish_search(job.run());

        assert_eq!(update.phase, TurnPhase::ComputerThinking);
        assert!(controller.move_log().is_empty());
        assert!(controller.begin_search().is_some(), "restart allows a new search");
    }

    #[test]
    fn test_restart_raises_stop_flag() {
        let mut controller = game_from(
            "3qk3/8/8/8/8/8/8/3QK3 w - - 0 1",
            GameMode::VsComputer {
                computer: Color::White,
            },
        );
        let job = controller.begin_search().expect("computer to move");

        controller.restart();

        assert!(job.run().aborted);
    }

    #[test]
    fn test_missing_move_plays_nothing() {
        let mut controller = game_from(
            "3qk3/8/8/8/8/8/8/3QK3 w - - 0 1",
            GameMode::VsComputer {
                computer: Color::White,
            },
        );
        let job = controller.begin_search().expect("computer to move");

        let update = controller.finish_search(SearchOutcome::failed(job.generation));

        assert_eq!(update.phase, TurnPhase::ComputerThinking);
        assert_eq!(update.result, None);
        assert!(controller.move_log().is_empty());
        assert_eq!(controller.side_to_move(), Color::White);

        let retry = controller.begin_search().expect("search can be retried");
        assert_eq!(retry.generation, controller.generation());
    }

    #[test]
    fn test_terminal_start_position() {
        let controller = game_from("8/8/8/8/8/6q1/5k2/7K w - - 0 1", GameMode::VsHuman);

        assert_eq!(controller.result(), Some(GameResult::Stalemate));
        assert!(!controller.clock().running);
    }

    #[test]
    fn test_invalid_fen_is_error() {
        let result = TurnController::new(GameConfig {
            start_fen: Some("not a fen".to_string()),
            ..GameConfig::default()
        });

        assert!(result.is_err());
    }
}
