use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// The read/write surface the rules engine needs from a board.
///
/// The engine never owns square storage.  It reads through `piece_on`, and for legality checks it
/// clones the position, applies a candidate move to the clone with `apply_move_unchecked`, and
/// throws the clone away.  `Clone` must therefore produce a fully independent copy.
pub trait Position: Clone {
    /// What piece, if any, stands on `square`?
    fn piece_on(&self, square: Square) -> Option<Piece>;

    /// Apply `m` without asking whether it is legal.  This must never call back into the rules
    /// engine's legality filter.
    fn apply_move_unchecked(&mut self, m: Move);

    /// Where is the king of `color`?  `None` only for boards that do not have one.
    fn king_square(&self, color: Color) -> Option<Square>;

    /// The most recent move, or `None` before the first move.
    fn last_move(&self) -> Option<Move>;
}
