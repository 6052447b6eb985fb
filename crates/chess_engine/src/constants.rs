//! Engine constants
//!
//! Material values in centipawn-like units and search window bounds.

use shakmaty::Role;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20000;

/// Bound used for an open alpha-beta window.
///
/// Larger than any reachable material sum (two kings plus promoted material
/// stays well below it) so `-AB_INF`/`AB_INF` behave as infinities.
pub const AB_INF: i32 = 1_000_000;

/// Depth used for the computer's move when nothing else is configured
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Deepest search the controller will accept
pub const MAX_SEARCH_DEPTH: u32 = 6;

/// Halfmove clock value at which the 75-move rule ends the game
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game by repetition
pub const FIVEFOLD: usize = 5;

/// Piece kinds a pawn may promote to, in the order they are offered
pub const PROMOTION_ROLES: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

/// Material value of a piece kind
#[inline]
pub const fn figure_value(role: Role) -> i32 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}
