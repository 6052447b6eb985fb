//! `shakmaty`-backed rules implementation
//!
//! `shakmaty` positions are plain values, so undo keeps the previous
//! position on a stack. Repetition is tracked with one Zobrist key per
//! reached position since the game started.

use super::RulesEngine;
use crate::constants::{FIVEFOLD, SEVENTY_FIVE_MOVE_PLIES};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::{ChessMove, Outcome};
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Board, CastlingMode, Chess, Color, EnPassantMode, Move, Piece, Position, Square};

/// A chess position with legal move generation, apply/undo and
/// terminal-outcome detection
#[derive(Debug, Clone)]
pub struct ChessPosition {
    position: Chess,
    undo_stack: Vec<Chess>,
    keys: Vec<Zobrist64>,
}

impl ChessPosition {
    /// Standard starting position
    pub fn new() -> Self {
        Self::from_chess(Chess::default())
    }

    pub fn from_fen(fen: &str) -> ChessEngineResult<Self> {
        let invalid = |message: String| ChessEngineError::InvalidFen {
            fen: fen.to_string(),
            message,
        };
        let parsed: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self::from_chess(position))
    }

    fn from_chess(position: Chess) -> Self {
        let key = Self::key_of(&position);
        Self {
            position,
            undo_stack: Vec::new(),
            keys: vec![key],
        }
    }

    fn key_of(position: &Chess) -> Zobrist64 {
        position.zobrist_hash(EnPassantMode::Legal)
    }

    pub fn to_fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    pub fn halfmoves(&self) -> u32 {
        self.position.halfmoves()
    }

    pub fn fullmoves(&self) -> u32 {
        self.position.fullmoves().get()
    }

    /// Number of moves applied since this position was set up
    pub fn plies_played(&self) -> usize {
        self.undo_stack.len()
    }

    /// Legal moves whose source is `square`, in generation order
    pub fn legal_moves_from(&self, square: Square) -> Vec<ChessMove> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }

    /// Standard algebraic notation for `mv` in the current position
    ///
    /// Falls back to coordinate notation when the move does not resolve to
    /// a legal move here.
    pub fn to_notation(&self, mv: &ChessMove) -> String {
        match self.resolve(mv) {
            Some(m) => SanPlus::from_move(self.position.clone(), &m).to_string(),
            None => mv.to_string(),
        }
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.position.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES && !self.is_checkmate()
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= FIVEFOLD
    }

    /// How many times the current position has occurred, this time included
    pub fn repetitions(&self) -> usize {
        match self.keys.last() {
            Some(current) => self.keys.iter().filter(|key| *key == current).count(),
            None => 0,
        }
    }

    fn convert(m: &Move) -> Option<ChessMove> {
        match UciMove::from_move(m, CastlingMode::Standard) {
            UciMove::Normal {
                from,
                to,
                promotion,
            } => Some(ChessMove {
                from,
                to,
                promotion,
            }),
            _ => None,
        }
    }

    /// Legal shakmaty move for `mv`, checked against this position only
    fn resolve(&self, mv: &ChessMove) -> Option<Move> {
        UciMove::Normal {
            from: mv.from,
            to: mv.to,
            promotion: mv.promotion,
        }
        .to_move(&self.position)
        .ok()
        .filter(|m| Self::convert(m).as_ref() == Some(mv))
    }
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for ChessPosition {
    type Move = ChessMove;

    fn legal_moves(&self) -> Vec<ChessMove> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(Self::convert)
            .collect()
    }

    fn apply(&mut self, mv: &ChessMove) -> ChessEngineResult<()> {
        let m = self.resolve(mv).ok_or_else(|| ChessEngineError::IllegalMove {
            uci: mv.to_string(),
            fen: self.to_fen(),
        })?;

        let previous = self.position.clone();
        self.position.play_unchecked(&m);
        self.undo_stack.push(previous);
        self.keys.push(Self::key_of(&self.position));
        Ok(())
    }

    fn undo(&mut self) -> ChessEngineResult<()> {
        let previous = self
            .undo_stack
            .pop()
            .ok_or(ChessEngineError::NothingToUndo)?;
        self.position = previous;
        self.keys.pop();
        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate() {
            // The side to move is mated, so the other side won
            Some(Outcome::Checkmate {
                winner: self.turn().other(),
            })
        } else if self.is_stalemate() {
            Some(Outcome::Stalemate)
        } else if self.is_insufficient_material() {
            Some(Outcome::InsufficientMaterial)
        } else if self.is_seventyfive_moves() {
            Some(Outcome::SeventyFiveMoves)
        } else if self.is_fivefold_repetition() {
            Some(Outcome::FivefoldRepetition)
        } else {
            None
        }
    }
}
