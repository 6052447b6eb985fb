//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use super::Evaluator;
use crate::constants::figure_value;
use crate::rules::ChessPosition;
use shakmaty::{Board, Color};

/// Evaluate material balance of a piece placement
///
/// Positive favours White, negative favours Black.
pub fn evaluate_board(board: &Board) -> i32 {
    let mut score = 0;

    for square in board.occupied() {
        if let Some(piece) = board.piece_at(square) {
            let value = figure_value(piece.role);
            score += match piece.color {
                Color::White => value,
                Color::Black => -value,
            };
        }
    }

    score
}

/// Evaluate material balance of a position
pub fn evaluate(position: &ChessPosition) -> i32 {
    evaluate_board(position.board())
}

/// The evaluator used for the computer's moves
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator<ChessPosition> for MaterialEvaluator {
    fn evaluate(&self, position: &ChessPosition) -> i32 {
        evaluate(position)
    }
}
