use crate::castle_side::CastleSide;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use std::fmt;

/// Represent a move in memory.
///
/// `piece` is the piece as it stood *before* the move, so `piece.has_moved` still tells you
/// whether this was its first move.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    source: Square,
    dest: Square,
    piece: Piece,
}

impl Move {
    /// Create a new move, given a source `Square`, a destination `Square`, and the `Piece` that
    /// moves.
    #[inline]
    pub fn new(source: Square, dest: Square, piece: Piece) -> Move {
        Move {
            source,
            dest,
            piece,
        }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }

    /// Get the piece that moves.
    #[inline]
    pub fn get_piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    fn row_delta(&self) -> i8 {
        self.dest.row() as i8 - self.source.row() as i8
    }

    #[inline]
    fn col_delta(&self) -> i8 {
        self.dest.col() as i8 - self.source.col() as i8
    }

    /// Is this a pawn advancing two squares?
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.row_delta().abs() == 2
    }

    /// Is this a king stepping two columns, i.e. castling?
    ///
    /// ```
    /// use chess_rules::{Color, Move, Piece, PieceKind, Square};
    ///
    /// let king = Piece::new(PieceKind::King, Color::White);
    /// let e1 = Square::new(7, 4).unwrap();
    /// let g1 = Square::new(7, 6).unwrap();
    /// assert!(Move::new(e1, g1, king).is_castling());
    /// ```
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.piece.kind == PieceKind::King && self.col_delta().abs() == 2
    }

    /// If this move is a castle, which rook does it take along?
    #[inline]
    pub fn castle_side(&self) -> Option<CastleSide> {
        if self.is_castling() {
            Some(CastleSide::from_delta(self.col_delta()))
        } else {
            None
        }
    }

    /// Is this an en passant capture of the pawn that made `last_move`?
    ///
    /// That requires `last_move` to be a two-square pawn advance, this move to be a pawn
    /// starting beside the pawn that just landed, and landing on the square that pawn skipped.
    pub fn is_en_passant(&self, last_move: Option<&Move>) -> bool {
        let last = match last_move {
            Some(last) => last,
            None => return false,
        };
        if !last.is_double_pawn_push() || self.piece.kind != PieceKind::Pawn {
            return false;
        }
        let beside = self.source.row() == last.dest.row()
            && (self.source.col() as i8 - last.dest.col() as i8).abs() == 1;
        let skipped_row = (last.source.row() + last.dest.row()) / 2;
        beside && self.dest.col() == last.dest.col() && self.dest.row() == skipped_row
    }

    /// The square holding the pawn an en passant capture removes.  It is beside the capturing
    /// pawn's start, not under its destination.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Square {
        // both coordinates come from on-board squares
        Square::new(self.source.row(), self.dest.col()).unwrap_or(self.dest)
    }

    /// Does this move take a pawn to the last row for its color?
    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.dest.row() == self.piece.color.to_their_backrank()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::str::FromStr;

    fn mv(from: &str, to: &str, kind: PieceKind, color: Color) -> Move {
        Move::new(
            Square::from_str(from).unwrap(),
            Square::from_str(to).unwrap(),
            Piece::new(kind, color),
        )
    }

    #[test]
    fn castling_sides() {
        let short = mv("e1", "g1", PieceKind::King, Color::White);
        let long = mv("e8", "c8", PieceKind::King, Color::Black);
        assert_eq!(short.castle_side(), Some(CastleSide::KingSide));
        assert_eq!(long.castle_side(), Some(CastleSide::QueenSide));
        assert!(!mv("e1", "f1", PieceKind::King, Color::White).is_castling());
        assert!(!mv("a1", "c1", PieceKind::Rook, Color::White).is_castling());
    }

    #[test]
    fn en_passant_both_sides() {
        let last = mv("d7", "d5", PieceKind::Pawn, Color::Black);
        let from_e = mv("e5", "d6", PieceKind::Pawn, Color::White);
        let from_c = mv("c5", "d6", PieceKind::Pawn, Color::White);
        assert!(from_e.is_en_passant(Some(&last)));
        assert!(from_c.is_en_passant(Some(&last)));
        assert_eq!(from_e.en_passant_capture_square(), Square::from_str("d5").unwrap());
        assert_eq!(from_c.en_passant_capture_square(), Square::from_str("d5").unwrap());
    }

    #[test]
    fn not_en_passant() {
        let last = mv("d7", "d5", PieceKind::Pawn, Color::Black);
        let single = mv("d6", "d5", PieceKind::Pawn, Color::Black);
        let capture = mv("e5", "d6", PieceKind::Pawn, Color::White);
        assert!(!capture.is_en_passant(None));
        assert!(!capture.is_en_passant(Some(&single)));
        assert!(!mv("e5", "e6", PieceKind::Pawn, Color::White).is_en_passant(Some(&last)));
        assert!(!mv("e5", "d6", PieceKind::Bishop, Color::White).is_en_passant(Some(&last)));
        assert!(!mv("f5", "e6", PieceKind::Pawn, Color::White).is_en_passant(Some(&last)));
        let rook_slide = mv("d8", "d6", PieceKind::Rook, Color::Black);
        assert!(!capture.is_en_passant(Some(&rook_slide)));
    }

    #[test]
    fn promotion_rows() {
        assert!(mv("a7", "a8", PieceKind::Pawn, Color::White).is_promotion());
        assert!(mv("b2", "a1", PieceKind::Pawn, Color::Black).is_promotion());
        assert!(!mv("a2", "a1", PieceKind::Pawn, Color::White).is_promotion());
        assert!(!mv("a7", "a8", PieceKind::Rook, Color::White).is_promotion());
    }

    #[test]
    fn classifiers_are_pure() {
        let last = mv("d7", "d5", PieceKind::Pawn, Color::Black);
        let capture = mv("e5", "d6", PieceKind::Pawn, Color::White);
        for _ in 0..2 {
            assert!(capture.is_en_passant(Some(&last)));
            assert!(!capture.is_castling());
            assert!(!capture.is_promotion());
        }
    }

    #[test]
    fn displays_like_uci() {
        assert_eq!(mv("e2", "e4", PieceKind::Pawn, Color::White).to_string(), "e2e4");
    }
}
