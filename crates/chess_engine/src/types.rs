//! Core engine types
//!
//! Move identification, terminal outcomes and search results shared by the
//! rules seam, the evaluator and the search.

use crate::constants::PROMOTION_ROLES;
use crate::error::ChessEngineError;
use shakmaty::{Color, Role, Square};
use std::fmt;
use std::str::FromStr;

/// A move as the presentation layer sees it: source, destination and an
/// optional promotion piece kind.
///
/// Castling is expressed as the king's own two-square step (`e1g1`), so a
/// click on the king's destination square finds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl ChessMove {
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// Complete a move with a promotion piece kind
    pub const fn with_promotion(self, role: Role) -> Self {
        Self {
            promotion: Some(role),
            ..self
        }
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Same squares, ignoring any promotion kind
    pub fn same_squares(&self, other: &ChessMove) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

impl FromStr for ChessMove {
    type Err = ChessEngineError;

    /// Parse coordinate notation such as `e2e4` or `a7a8q`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessEngineError::InvalidNotation {
            text: s.to_string(),
        };

        let text = s.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid());
        }

        let from: Square = text[0..2].parse().map_err(|_| invalid())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid())?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => {
                let role = Role::from_char(c.to_ascii_lowercase()).ok_or_else(invalid)?;
                if !PROMOTION_ROLES.contains(&role) {
                    return Err(invalid());
                }
                Some(role)
            }
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

/// Terminal outcome reported by the rules engine
///
/// Variants are listed in the order they are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The side to move is checkmated
    Checkmate { winner: Color },
    /// The side to move has no legal move and is not in check
    Stalemate,
    /// Neither side can possibly deliver mate
    InsufficientMaterial,
    /// 75 moves by each side without a capture or pawn move
    SeventyFiveMoves,
    /// The current position occurred for the fifth time
    FivefoldRepetition,
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none()
    }
}

/// Result of a search call
///
/// `best_move == None` means no move was searched at this node: either the
/// depth horizon was reached or the position is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    pub score: i32,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    pub fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_plain_move() {
        let mv: ChessMove = "e2e4".parse().unwrap();
        assert_eq!(mv.from, Square::E2);
        assert_eq!(mv.to, Square::E4);
        assert_eq!(mv.promotion, None);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_parse_promotion_move() {
        let mv: ChessMove = "a7a8N".parse().unwrap();
        assert_eq!(mv.promotion, Some(Role::Knight));
        assert_eq!(mv.to_string(), "a7a8n");
    }

    #[test]
    fn test_rejects_malformed_notation() {
        assert!("e2".parse::<ChessMove>().is_err());
        assert!("e2e9".parse::<ChessMove>().is_err());
        assert!("a7a8k".parse::<ChessMove>().is_err());
        assert!("a7a8p".parse::<ChessMove>().is_err());
        assert!("e2e4qq".parse::<ChessMove>().is_err());
    }

    #[test]
    fn test_same_squares_ignores_promotion() {
        let plain = ChessMove::new(Square::B7, Square::B8);
        let queen = plain.with_promotion(Role::Queen);
        assert!(plain.same_squares(&queen));
        assert_ne!(plain, queen);
        assert!(queen.is_promotion());
    }

    #[test]
    fn test_outcome_winner() {
        let mate = Outcome::Checkmate {
            winner: Color::Black,
        };
        assert_eq!(mate.winner(), Some(Color::Black));
        assert!(!mate.is_draw());
        assert!(Outcome::FivefoldRepetition.is_draw());
        assert_eq!(Outcome::Stalemate.winner(), None);
    }
}
