use crate::color::Color;
use crate::square::Square;

/// Which rook is the king castling with?
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// How many sides can a king castle to?
pub const NUM_CASTLE_SIDES: usize = 2;

/// Enumerate both castle sides.
pub const ALL_CASTLE_SIDES: [CastleSide; NUM_CASTLE_SIDES] =
    [CastleSide::KingSide, CastleSide::QueenSide];

impl CastleSide {
    /// Which side does a king move of `delta` columns castle toward?  Only the sign matters.
    #[inline]
    pub fn from_delta(delta: i8) -> CastleSide {
        if delta > 0 {
            CastleSide::KingSide
        } else {
            CastleSide::QueenSide
        }
    }

    /// Which way does the king walk, in columns?
    #[inline]
    pub fn direction(&self) -> i8 {
        match *self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// The column the rook starts on.
    #[inline]
    pub fn rook_col(&self) -> u8 {
        match *self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// The column the rook lands on.
    #[inline]
    pub fn rook_dest_col(&self) -> u8 {
        match *self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Where does the rook start, given the row the king castles on?
    #[inline]
    pub fn rook_square(&self, row: u8) -> Option<Square> {
        Square::new(row, self.rook_col())
    }

    /// Where does the rook end up, given the row the king castles on?
    #[inline]
    pub fn rook_dest(&self, row: u8) -> Option<Square> {
        Square::new(row, self.rook_dest_col())
    }

    /// Convert to the FEN castling letter for a color.
    ///
    /// ```
    /// use chess_rules::{CastleSide, Color};
    ///
    /// assert_eq!(CastleSide::KingSide.to_char(Color::White), 'K');
    /// assert_eq!(CastleSide::QueenSide.to_char(Color::Black), 'q');
    /// ```
    pub fn to_char(&self, color: Color) -> char {
        let c = match *self {
            CastleSide::KingSide => 'k',
            CastleSide::QueenSide => 'q',
        };
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}
