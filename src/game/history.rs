//! Move log for the current game
//!
//! Every applied move, human or computer, is recorded with both its
//! coordinate and algebraic text. The history panel shows [`MoveLog::lines`],
//! one line per full move.

use chess_engine::{ChessMove, Color};

/// One applied move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// 1-based half-move index within this game
    pub ply: usize,
    /// Full-move number the move was played on
    pub fullmove: u32,
    pub color: Color,
    pub mv: ChessMove,
    /// Coordinate notation, e.g. `e7e8q`
    pub uci: String,
    /// Algebraic notation, or the coordinate text if it could not be formed
    pub san: String,
}

/// Chronological list of all moves made since the game started
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    moves: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move played by `color` on full move `fullmove`
    pub fn add_move(&mut self, color: Color, fullmove: u32, mv: ChessMove, san: String) {
        self.moves.push(MoveRecord {
            ply: self.moves.len() + 1,
            fullmove,
            color,
            mv,
            uci: mv.to_string(),
            san,
        });
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// History panel text, e.g. `["1. e4 e5", "2. Nf3"]`
    ///
    /// A game started from a position with Black to move opens with
    /// `"n... move"`.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut open_move: Option<u32> = None;

        for record in &self.moves {
            match record.color {
                Color::White => {
                    lines.push(format!("{}. {}", record.fullmove, record.san));
                    open_move = Some(record.fullmove);
                }
                Color::Black => match (open_move, lines.last_mut()) {
                    (Some(n), Some(line)) if n == record.fullmove => {
                        line.push(' ');
                        line.push_str(&record.san);
                        open_move = None;
                    }
                    _ => {
                        lines.push(format!("{}... {}", record.fullmove, record.san));
                        open_move = None;
                    }
                },
            }
        }

        lines
    }
}
