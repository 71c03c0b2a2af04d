use crate::color::Color;
use std::fmt;

/// Represent the kind of a chess piece as a very simple enum
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How many piece kinds are there?
pub const NUM_PIECE_KINDS: usize = 6;

/// An array representing each piece kind, in order of ascending value.
pub const ALL_PIECE_KINDS: [PieceKind; NUM_PIECE_KINDS] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// How many ways can I promote?
pub const NUM_PROMOTION_KINDS: usize = 4;

/// What kinds can a pawn become?
pub const PROMOTION_KINDS: [PieceKind; NUM_PROMOTION_KINDS] = [
    PieceKind::Queen,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Bishop,
];

impl PieceKind {
    /// Convert a piece kind with a color to a FEN character.
    #[inline]
    pub fn to_char(&self, color: Color) -> char {
        let c = match *self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char(Color::Black))
    }
}

/// A piece standing on the board.
///
/// `has_moved` flips to `true` the first time the piece leaves its square and never goes back;
/// castling depends on it for both the king and the rooks.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[inline]
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Is this a `kind` belonging to `color`?
    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Convert this piece to its FEN character.  White pieces are upper case.
    #[inline]
    pub fn to_char(&self) -> char {
        self.kind.to_char(self.color)
    }

    /// Parse a FEN character.  The piece is reported as unmoved.
    pub fn from_char(c: char) -> Option<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[test]
fn fen_chars() {
    for kind in ALL_PIECE_KINDS.iter() {
        for color in [Color::White, Color::Black].iter() {
            let piece = Piece::new(*kind, *color);
            assert_eq!(Piece::from_char(piece.to_char()), Some(piece));
        }
    }
    assert_eq!(Piece::from_char('x'), None);
    assert_eq!(Piece::new(PieceKind::Knight, Color::White).to_char(), 'N');
}
