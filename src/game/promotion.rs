//! Pawn promotion picker layout
//!
//! When a pawn reaches the last rank the presentation shows the four piece
//! kinds on the destination file, starting at the destination square and
//! stacked toward the centre of the board: Queen, Rook, Bishop, Knight.

use chess_engine::constants::PROMOTION_ROLES;
use chess_engine::{Rank, Role, Square};

/// Picker ranks for a promotion on the eighth rank, destination first
const FROM_EIGHTH: [Rank; 4] = [Rank::Eighth, Rank::Seventh, Rank::Sixth, Rank::Fifth];
/// Picker ranks for a promotion on the first rank, destination first
const FROM_FIRST: [Rank; 4] = [Rank::First, Rank::Second, Rank::Third, Rank::Fourth];

/// Squares of the picker options for a promotion landing on `to`
pub fn picker_squares(to: Square) -> [(Role, Square); 4] {
    let ranks = if to.rank() == Rank::First {
        FROM_FIRST
    } else {
        FROM_EIGHTH
    };
    std::array::from_fn(|i| (PROMOTION_ROLES[i], Square::from_coords(to.file(), ranks[i])))
}

/// Piece kind shown at `clicked`, or `None` for a click outside the picker
pub fn role_at(to: Square, clicked: Square) -> Option<Role> {
    picker_squares(to)
        .into_iter()
        .find(|(_, square)| *square == clicked)
        .map(|(role, _)| role)
}
