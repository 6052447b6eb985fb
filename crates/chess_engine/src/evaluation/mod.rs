//! Static evaluation
//!
//! Material only: no king safety, mobility or pawn structure terms.
//!
//! ## Module Organization
//!
//! - `material` - Material balance evaluation

mod material;

pub use material::{evaluate, evaluate_board, MaterialEvaluator};

/// Scores a position from White's point of view
///
/// Implementations must be pure: the search calls them at every leaf
/// without expecting shared state to change.
pub trait Evaluator<P: ?Sized> {
    fn evaluate(&self, position: &P) -> i32;
}

impl<P: ?Sized, F> Evaluator<P> for F
where
    F: Fn(&P) -> i32,
{
    fn evaluate(&self, position: &P) -> i32 {
        self(position)
    }
}
